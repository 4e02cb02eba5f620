use recbot::{
    config::SlateBuilderConfig,
    services::slate_builder::{build_mapping, write_mapping, SlateBuilderInput},
    telemetry,
};

fn main() -> anyhow::Result<()> {
    let config = SlateBuilderConfig::from_env()?;
    telemetry::init_tracing();

    let input = match &config.input_path {
        Some(path) => SlateBuilderInput::from_file(path)?,
        None => SlateBuilderInput::default(),
    };

    let mapping = build_mapping(&input);
    write_mapping(&config.output_path, &mapping)?;

    let written = std::fs::canonicalize(&config.output_path)?;
    println!("Wrote {}", written.display());

    Ok(())
}
