/*!
# Argtree: Demo.

Try it out with something like:
cargo run --example create-demo -- --reference 5 --question hi -tt yo -vCLI
*/

use argtree::{
	Argument,
	ArgTreeError,
	CommandLine,
	DataType,
	Kind,
};
use tracing::Level;



/// # Help.
const HELP: &str = "This is the default help message for the demo.";



fn main() -> Result<(), ArgTreeError> {
	tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

	let mut cli = CommandLine::new();
	cli.add_argument(
		Argument::new(Kind::WILDCARD | Kind::OPTION, "tt", "testing", false, HELP)?
			.with_child(Argument::new_parameter("test", "string".parse()?))
	);
	cli.add_argument(
		Argument::new(Kind::OPTION, "r", "reference", false, HELP)?
			.with_child(Argument::new_parameter("number", DataType::Int))
	);
	cli.add_argument(
		Argument::new(Kind::OPTION, "q", "question", false, HELP)?
			.with_child(Argument::new_parameter("theq", DataType::String))
	);

	let code = cli.parse_env();
	if ! code.is_ok() { println!("{code}"); }

	println!("{}", cli.tree());

	let opts = cli.parsed_args();
	println!("{opts}");
	println!("reference: {}", opts.get("reference").get("number").value());
	println!("question:  {}", opts.get("question").get("theq").value());
	println!("testing:   {}", opts.get("testing").get("test").value());

	Ok(())
}
