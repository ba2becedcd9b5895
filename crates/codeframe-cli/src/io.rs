use crate::args::FormatArg;
use std::error::Error;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

pub(crate) fn write_output_with_tty(
    bytes: Vec<u8>,
    output: Option<&PathBuf>,
    format: Option<FormatArg>,
    stdout_is_tty: bool,
) -> Result<(), Box<dyn Error>> {
    if let Some(path) = output {
        std::fs::write(path, bytes)?;
        if stdout_is_tty {
            print_wrote(path);
        }
        return Ok(());
    }

    if stdout_is_tty {
        let default_name = match format {
            Some(FormatArg::Svg) => "code-snippet.svg",
            _ => "code-snippet.png",
        };
        std::fs::write(default_name, bytes)?;
        print_wrote(Path::new(default_name));
        return Ok(());
    }

    io::stdout().write_all(&bytes)?;
    Ok(())
}

pub(crate) fn print_wrote(path: &Path) {
    println!("WROTE {}", path.display());
}

pub(crate) fn read_stdin() -> Result<String, io::Error> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

pub(crate) fn read_stdin_with(stdin_override: Option<&str>) -> Result<String, io::Error> {
    if let Some(value) = stdin_override {
        return Ok(value.to_string());
    }
    read_stdin()
}
