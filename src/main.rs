mod icon_config;
mod icon_generator;
mod icon_layout;

use icon_config::IconConfig;
use icon_generator::{GenerationReport, IconError, IconGenerator};
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init(); // Initialize logger

    let source_arg = env::args_os().nth(1).map(PathBuf::from);
    let config = IconConfig::load().with_source_override(source_arg);
    log::debug!("Using config: {:?}", config);

    let generator = IconGenerator::new(&config.output_dir);
    let result = generator.generate(&config.source);

    match &result {
        Ok(report) => {
            log::info!(
                "Generated {} icons from a {}x{} source",
                report.files.len(),
                report.source_width,
                report.source_height
            );
            println!("\n📋 Next steps:");
            println!("1. Verify that all icons are in {}/", report.output_dir.display());
            println!("2. Test the PWA installation in the browser");
        }
        Err(e) => {
            if e.is_processing_failure() {
                println!("❌ Error while generating icons: {}", e);
            }
            println!("\n💡 Tips:");
            for tip in failure_tips(e, generator.output_dir()) {
                println!("- {}", tip);
            }
        }
    }

    ExitCode::from(exit_status(&result))
}

fn exit_status(result: &Result<GenerationReport, IconError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn failure_tips(err: &IconError, output_dir: &Path) -> Vec<String> {
    match err {
        IconError::SourceNotFound(path) => vec![
            format!("Check that {} exists and is readable", path.display()),
            "Pass another image path as the first argument".to_string(),
        ],
        IconError::EmptySource(_) | IconError::Image(_) => vec![
            "Check that the source is a valid PNG, JPEG, GIF, BMP, ICO or WebP image".to_string(),
        ],
        IconError::Io { .. } => vec![format!("Check that {} is writable", output_dir.display())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status_success() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.png");
        image::RgbaImage::new(8, 8).save(&source).unwrap();

        let result = IconGenerator::new(dir.path().join("icons")).generate(&source);
        assert_eq!(exit_status(&result), 0);
    }

    #[test]
    fn test_exit_status_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let result = IconGenerator::new(dir.path().join("icons"))
            .generate(&dir.path().join("missing.png"));
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn test_exit_status_processing_failure() {
        let result = Err(IconError::EmptySource(PathBuf::from("empty.ppm")));
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn test_missing_source_tips_skip_output_dir() {
        let err = IconError::SourceNotFound(PathBuf::from("assets/images/logo.png"));
        let tips = failure_tips(&err, Path::new("assets/icons"));

        assert!(tips.iter().any(|t| t.contains("assets/images/logo.png")));
        assert!(tips.iter().all(|t| !t.contains("assets/icons")));
    }

    #[test]
    fn test_write_failure_tips_name_output_dir() {
        let err = IconError::Io {
            path: PathBuf::from("assets/icons"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let tips = failure_tips(&err, Path::new("assets/icons"));

        assert_eq!(tips, vec!["Check that assets/icons is writable".to_string()]);
    }
}
