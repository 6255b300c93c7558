use anyhow::{Result, bail};
use path_slash::PathExt;
use sample_data_gen::{Encoding, config::Config, generator, logging};
use tracing::info;

fn main() -> Result<()> {
    let config = Config::from_cli();
    logging::init(config.verbose);

    // A directory error aborts before any fixture is touched
    let report = generator::generate(&config.output_dir, config.byte_order)?;

    if !report.is_success() {
        let names: Vec<&str> = report.failed.iter().map(|(e, _)| e.name()).collect();
        bail!(
            "{} of {} fixtures could not be written: {}",
            names.len(),
            Encoding::ALL.len(),
            names.join(", ")
        );
    }

    let shown = dunce::canonicalize(&config.output_dir).unwrap_or(config.output_dir);
    info!(
        "{} fixtures ready in {}",
        report.written.len(),
        shown.to_slash_lossy()
    );
    Ok(())
}
