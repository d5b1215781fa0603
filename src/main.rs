use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Command;
use ttf2cxf::{convert, GlyphSource, Header, Options, TtfFont};

fn main() {
    let command = Command::new("ttf2cxf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts TrueType font outlines to the CXF stroke-font format")
        .arg(
            clap::Arg::new("ttf")
                .help("An existing TrueType font file")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::new("cxf")
                .help("The CXF font file to create; '-' or 'STDOUT' streams to standard output")
                .required(true)
                .index(2),
        )
        .arg(
            clap::Arg::new("seg_arc_limit")
                .short('s')
                .long("seg-arc-limit")
                .help("Arc angle approximation limit in degrees")
                .value_parser(clap::value_parser!(f64))
                .default_value("50"),
        )
        .arg(
            clap::Arg::new("author")
                .short('a')
                .long("author")
                .help("Author of the font. Preferably full name and e-mail address")
                .default_value("Unknown"),
        )
        .arg(
            clap::Arg::new("letter_spacing")
                .short('l')
                .long("letter-spacing")
                .help("Letter spacing")
                .value_parser(clap::value_parser!(f64))
                .default_value("3.0"),
        )
        .arg(
            clap::Arg::new("word_spacing")
                .short('w')
                .long("word-spacing")
                .help("Word spacing")
                .value_parser(clap::value_parser!(f64))
                .default_value("6.75"),
        )
        .arg(
            clap::Arg::new("line_spacing_factor")
                .short('f')
                .long("line-spacing-factor")
                .help("Line spacing factor")
                .value_parser(clap::value_parser!(f64))
                .default_value("1.0"),
        )
        .arg(
            clap::Arg::new("extended")
                .short('e')
                .long("extended")
                .help("Include extended characters above code 255")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .help("Set the level of verbosity")
                .action(clap::ArgAction::Count),
        );

    let args = command.get_matches();
    env_logger::Builder::new()
        .filter_level(match args.get_count("verbosity") {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    let input_name = PathBuf::from(args.get_one::<String>("ttf").unwrap());
    let output_name = args.get_one::<String>("cxf").unwrap();

    let tolerance = *args.get_one::<f64>("seg_arc_limit").unwrap();
    // A zero or negative limit would stall the subdivision.
    let tolerance = if tolerance <= 0.0 { 45.0 } else { tolerance };

    log::info!("TTF file: {}", input_name.display());
    log::info!("CXF file: {}", output_name);

    let font = match TtfFont::load(&input_name) {
        Ok(font) => font,
        Err(error) => {
            log::error!("Failed to load font {}: {}", input_name.display(), error);
            std::process::exit(1);
        }
    };

    let header = Header {
        name: font.family_name().unwrap_or_else(|| "Unknown".to_string()),
        letter_spacing: *args.get_one::<f64>("letter_spacing").unwrap(),
        word_spacing: *args.get_one::<f64>("word_spacing").unwrap(),
        line_spacing_factor: *args.get_one::<f64>("line_spacing_factor").unwrap(),
        author: args.get_one::<String>("author").unwrap().clone(),
    };
    log::info!("family: {}", header.name);

    let mut output: Box<dyn Write> = if output_name == "-" || output_name == "STDOUT" {
        Box::new(io::stdout().lock())
    } else {
        match File::create(output_name) {
            Ok(file) => Box::new(BufWriter::new(file)),
            Err(error) => {
                log::error!("Cannot open file {} for writing: {}", output_name, error);
                std::process::exit(2);
            }
        }
    };

    let options = Options {
        tolerance_degrees: tolerance,
        extended: args.get_flag("extended"),
        header,
    };

    match convert(&font, &options, &mut output) {
        Ok(summary) => {
            log::info!("Wrote {} glyphs", summary.written);
            if summary.skipped_extended > 0 {
                log::info!("Skipped {} characters...", summary.skipped_extended);
            }
            if summary.failed > 0 {
                log::warn!("{} glyphs failed to convert", summary.failed);
            }
        }
        Err(error) => {
            log::error!("Conversion failed: {}", error);
            std::process::exit(1);
        }
    }

    if let Err(error) = output.flush() {
        log::error!("Error writing {}: {}", output_name, error);
        std::process::exit(2);
    }
}
