#![allow(dead_code)]

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::process::{Command, Output};

use image::{DynamicImage, ImageOutputFormat, RgbImage};
use tempfile::TempDir;

/// Path to the built binary
pub fn conf_ticket_binary() -> &'static str {
    env!("CARGO_BIN_EXE_conf-ticket")
}

/// Helper struct to run conf-ticket commands with an isolated config file
pub struct TicketTest {
    pub temp_dir: TempDir,
}

impl TicketTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        TicketTest { temp_dir }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config").join("config.yaml")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(conf_ticket_binary())
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("CONF_TICKET_CONFIG", self.config_path())
            .output()
            .expect("Failed to execute conf-ticket command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Write a small solid-color PNG into the temp directory
    pub fn write_png(&self, name: &str, width: u32, height: u32) -> String {
        let mut bytes = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, image::Rgb([245, 116, 99])))
            .write_to(&mut bytes, ImageOutputFormat::Png)
            .expect("Failed to encode PNG");
        self.write_file(name, &bytes.into_inner())
    }

    pub fn write_file(&self, name: &str, content: &[u8]) -> String {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture");
        path.to_string_lossy().into_owned()
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Failed to read config file")
    }
}
