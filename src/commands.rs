use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;
use std::path::PathBuf;

use lumapal::bitmap::DEFAULT_SQUARE_SIZE;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{PKG_VERSION} [{BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Converts Lumacode palettes between PAL, VH and BMP")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(long, global = true, help = "Prints the decoded palette.")]
	pub debug: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct BmpArgs {
	#[arg(help = "The input file (.pal or .vh).")]
	pub input: PathBuf,
	#[arg(help = "The output file. Defaults to the input file name with a .bmp extension.")]
	pub output: Option<PathBuf>,

	#[arg(short, long, help = "Sets the size of each color square in pixels.", default_value_t = DEFAULT_SQUARE_SIZE)]
	pub square_size: u32,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ConvertArgs {
	#[arg(help = "The input file (.pal or .vh).")]
	pub input: PathBuf,
	#[arg(help = "The output file. Defaults to the input file name with the target format's extension.")]
	pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(name = "tobmp", about = "Renders a palette as a BMP image of 16×4 color squares")]
	ToBmp(BmpArgs),

	#[command(name = "topal", about = "Converts a palette to the raw PAL format")]
	ToPal(ConvertArgs),

	#[command(name = "tovh", about = "Converts a palette to the Verilog VH format")]
	ToVh(ConvertArgs),
}
