use anyhow::Result;
use cmsrec::RecordCurator;
use std::io::{self, BufWriter};

fn main() -> Result<()> {
    // Inputs are read relative to the working directory, in the curation tree layout.
    let records = RecordCurator::new().progress(true).run()?;

    let stdout = io::stdout();
    cmsrec::write_records(BufWriter::new(stdout.lock()), &records)?;
    Ok(())
}
