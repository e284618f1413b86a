//! Interactive walk through the readers: a line, a file named on the
//! command line, bulk release, then one raw key press.

use lineread::{release, release_all, std_io, ReadError};
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;

fn prompt(text: &str) {
    print!("{text}");
    let _ = io::stdout().flush();
}

fn describe(err: ReadError) -> &'static str {
    match err {
        ReadError::EndOfStream => "input ended before a full line",
        ReadError::AllocationFailure => "out of memory",
        ReadError::ShortRead { .. } => "file changed while it was read",
        ReadError::EmptySource => "file is empty",
        ReadError::Read(_) => "read failed",
        ReadError::Seek(_) => "file is not seekable",
        ReadError::Terminal(_) => "terminal could not be configured",
    }
}

fn main() -> ExitCode {
    prompt("Enter string: ");
    let mut line = match std_io::read_line() {
        Ok(line) => Some(line),
        Err(err) => {
            eprintln!("error: {}", describe(err));
            return ExitCode::FAILURE;
        }
    };
    if let Some(line) = &line {
        println!("Read: '{}'", String::from_utf8_lossy(line));
    }

    let mut contents = None;
    if let Some(path) = env::args().nth(1) {
        let result = File::open(&path)
            .map_err(|e| ReadError::Read(e.kind().into()))
            .and_then(|mut file| std_io::read_file(&mut file, true));

        match result {
            Ok(read) => {
                println!("{path}: {} bytes", read.len());
                contents = Some(read);
            }
            Err(err) => eprintln!("{path}: {}", describe(err)),
        }
    }

    let mut scratch = Some(vec![0u8; 100]);
    let released = release!(scratch) + release_all([&mut line, &mut contents]);
    println!("Released {released} buffers");

    #[cfg(unix)]
    {
        prompt("Press a key: ");
        match lineread::read_raw_char() {
            Ok(c) => match c.control() {
                Some(control) => println!("\n{control:?} ({})", c.byte()),
                None => println!("\n'{}' ({})", c.to_char(), c.byte()),
            },
            Err(err) => {
                eprintln!("\nerror: {}", describe(err));
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
