pub use graph::*;

use {
    clap::Parser,
    memmap::Mmap,
    nom::IResult,
    std::{
        fs::File,
        io::{Error as IoError, ErrorKind, Result as IoResult},
        str::{from_utf8, Utf8Error},
    },
};

mod graph;

/// Arguments for program execution
#[derive(Debug, Parser)]
pub struct Args {
    /// Input file path. Standard input is read to completion when this is empty.
    #[arg(short, long, default_value_t)]
    input_file_path: String,

    /// Print extra information, if there is any
    #[arg(short, long, default_value_t)]
    pub verbose: bool,
}

impl Args {
    /// Returns the input file path, or `None` if the field is empty and standard input should be
    /// read instead
    pub fn input_file_path(&self) -> Option<&str> {
        (!self.input_file_path.is_empty()).then_some(&self.input_file_path)
    }
}

/// Opens a memory-mapped UTF-8 file at a specified path, and passes in a `&str` over the file to a
/// provided callback function
///
/// # Errors
///
/// This function returns a `Result::Err`-wrapped `std::io::Error` if `std::fs::File::open` was
/// unable to open a read-only file at `file_path`, `memmap::Mmap::map` fails to create an `Mmap`
/// instance for the opened file, or `std::str::from_utf8` determines the file is not in valid
/// UTF-8 format. `f` is only executed *iff* an error is not encountered.
///
/// # Safety
///
/// This function uses `Mmap::map`, which is an unsafe function. There is no guarantee that an
/// external process won't modify the file after it is opened as read-only.
pub unsafe fn open_utf8_file<T, F: FnOnce(&str) -> T>(file_path: &str, f: F) -> IoResult<T> {
    let file: File = File::open(file_path)?;

    // SAFETY: This operation is unsafe
    let mmap: Mmap = Mmap::map(&file)?;
    let bytes: &[u8] = &mmap;
    let utf8_str: &str = from_utf8(bytes).map_err(|utf8_error: Utf8Error| -> IoError {
        IoError::new(ErrorKind::InvalidData, utf8_error)
    })?;

    Ok(f(utf8_str))
}

pub trait Parse: Sized {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self>;
}
