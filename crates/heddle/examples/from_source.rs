//! Compile a chart source string and print the SVG to stdout.
//!
//! Run with: `cargo run --example from_source -p heddle`

use heddle::{ChartBuilder, HeddleError, config::AppConfig};

fn main() -> Result<(), HeddleError> {
    let source = "\
\\module brew_coffee
prepare a pot \\in beans \\out coffee
    grind beans \\in beans \\out grounds
    \\repeat until carafe is full
        pour water \\in grounds \\out coffee
    \\fork still hot
        \\true serve immediately
        \\false let it cool
\\data beans
";

    let builder = ChartBuilder::new(AppConfig::default());
    let chart = builder.compile(source, None)?;
    let svg = builder.render_svg(&chart);

    println!("{svg}");
    Ok(())
}
