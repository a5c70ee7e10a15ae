//! pyradiomics2xnat CLI - Convert a pyradiomics CSV to an XNAT assessor XML
//!
//! ```bash
//! pyradiomics2xnat https://xnat.example.org P1 XNAT_E00001 Session1 3 \
//!     /data/mask.nii.gz features.csv assessor.xml
//! ```

use clap::Parser;
use pyradiomics2xnat::logs::{log_error, log_info, log_success};
use pyradiomics2xnat::{convert_csv, write_xml_file, AssessorInfo, ConversionOptions, GeneralInfo};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pyradiomics2xnat", version)]
#[command(about = "Convert a pyradiomics feature CSV into an XNAT radiomics assessor XML", long_about = None)]
struct Cli {
    /// XNAT server URL, used to locate the assessor schemas
    #[arg(value_name = "XNAT_HOST")]
    xnat_host: String,

    /// XNAT project ID
    #[arg(value_name = "PROJECT")]
    project: String,

    /// ID of the parent image session
    #[arg(value_name = "SESSION_ID")]
    session_id: String,

    /// Label of the parent image session
    #[arg(value_name = "SESSION_LABEL")]
    session_label: String,

    /// ID of the scan the features were extracted from
    #[arg(value_name = "SCAN_ID")]
    scan_id: String,

    /// URI of the segmentation mask
    #[arg(value_name = "MASK_FILE_URI")]
    mask_file_uri: String,

    /// pyradiomics CSV output
    #[arg(value_name = "CSV_IN")]
    csv_in: PathBuf,

    /// Assessor XML to write
    #[arg(value_name = "XML_OUT")]
    xml_out: PathBuf,
}

impl Cli {
    fn options(&self) -> ConversionOptions {
        ConversionOptions {
            assessor: AssessorInfo::new(
                &self.xnat_host,
                &self.project,
                &self.session_id,
                &self.session_label,
            ),
            general: GeneralInfo::new(&self.scan_id, &self.mask_file_uri),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    log_info(format!("Reading {}", cli.csv_in.display()));

    let result = convert_csv(&cli.csv_in, &cli.options())?;
    write_xml_file(&cli.xml_out, &result.xml)?;

    log_success(format!(
        "Wrote assessor {} to {}",
        result.assessor_id,
        cli.xml_out.display()
    ));
    Ok(())
}
