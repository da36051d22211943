use std::io::Write;
use std::process::Command;

/// Write the preprocessed shader to a uniquely named `.wgsl` temp file and
/// run the external `naga` validator on it, forwarding its output.
///
/// The temp file is removed when it drops, on every exit path; removal
/// failures are swallowed by the drop impl. The validator's exit status is
/// not inspected: the caller's job ends once the validator has run.
pub fn run_validator(shader_source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = tempfile::Builder::new().suffix(".wgsl").tempfile()?;
    temp_file.write_all(shader_source.as_bytes())?;

    println!(
        "Validating preprocessed shader: {}",
        temp_file.path().display()
    );

    Command::new("naga")
        .arg(temp_file.path())
        .args(["--input-kind", "wgsl"])
        .status()?;

    Ok(())
}
