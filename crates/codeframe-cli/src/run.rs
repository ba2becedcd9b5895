use crate::args::{Args, FormatArg};
use crate::io::{read_stdin_with, write_output_with_tty};
use clap::{CommandFactory, Parser};
use codeframe_core::{render, Options, OutputFormat};
use std::error::Error;
use std::path::Path;

pub(crate) fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    run_with(
        args,
        atty::is(atty::Stream::Stdin),
        atty::is(atty::Stream::Stdout),
        None,
    )
}

pub(crate) fn run_with(
    args: Args,
    stdin_is_tty: bool,
    stdout_is_tty: bool,
    stdin_override: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let mut options = match &args.config {
        Some(path) => Options::from_json(&std::fs::read_to_string(path)?)?,
        None => Options::default(),
    };
    if let Some(background) = args.background {
        options.background_color = Some(background);
    }
    if let Some(width) = args.width {
        options.width = Some(width);
    }
    if let Some(height) = args.height {
        options.height = Some(height);
    }
    if let Some(padding) = args.padding {
        options.padding = Some(padding);
    }
    if let Some(family) = args.font_family {
        options.font_family = Some(family);
    }
    if let Some(file) = args.font_file {
        options.font_file = Some(file);
    }
    if let Some(size) = args.font_size {
        options.font_size = Some(size);
    }
    if let Some(line_height) = args.line_height {
        options.line_height = Some(line_height);
    }
    if let Some(radius) = args.terminal_radius {
        options.terminal_radius = Some(radius);
    }
    if let Some(radius) = args.control_radius {
        options.control_button_radius = Some(radius);
    }
    if let Some(spacing) = args.control_spacing {
        options.control_button_spacing = Some(spacing);
    }
    if let Some(optimize) = args.optimize {
        options.png.optimize = optimize;
    }
    if let Some(level) = args.png_level {
        options.png.level = level;
    }
    if let Some(strip) = args.png_strip {
        options.png.strip = strip.into();
    }

    let code = match args.input.as_deref() {
        Some("-") => read_stdin_with(stdin_override)?,
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            if stdin_is_tty {
                Args::command().print_help()?;
                return Ok(());
            }
            read_stdin_with(stdin_override)?
        }
    };

    let format = resolve_format(args.format, args.output.as_deref());
    let bytes = match format {
        Some(arg) => render(&code, &options, arg.into())?,
        None => render(&code, &options, OutputFormat::Png)?,
    };
    write_output_with_tty(bytes, args.output.as_ref(), format, stdout_is_tty)
}

fn resolve_format(format: Option<FormatArg>, output: Option<&Path>) -> Option<FormatArg> {
    if format.is_some() {
        return format;
    }
    let ext = output?.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "svg" => Some(FormatArg::Svg),
        "png" => Some(FormatArg::Png),
        _ => None,
    }
}
