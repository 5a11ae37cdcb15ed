//! The `cfg` command: print the resolved configuration as JSON, each value
//! paired with its source (`default`, `file` or `env`).

use std::io::Write;

use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use crate::ui;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };
    write_resolved(&resolved, out)
}

fn write_resolved(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": { "value": config.seed, "source": sources.seed },
        "stand_on": { "value": config.stand_on, "source": sources.stand_on },
        "reshuffle_threshold": {
            "value": config.reshuffle_threshold,
            "source": sources.reshuffle_threshold,
        },
        "history": { "value": config.history, "source": sources.history },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SEED_ENV, load_with_sources_from};

    #[test]
    fn values_carry_their_source() {
        let resolved =
            load_with_sources_from(|k| (k == SEED_ENV).then(|| "77".to_string())).unwrap();
        let mut out = Vec::new();
        write_resolved(&resolved, &mut out).unwrap();

        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["seed"]["value"], 77);
        assert_eq!(v["seed"]["source"], "env");
        assert_eq!(v["stand_on"]["value"], 17);
        assert_eq!(v["stand_on"]["source"], "default");
        assert_eq!(v["reshuffle_threshold"]["value"], 14);
        assert!(v["history"]["value"].is_null());
    }

    #[test]
    fn output_is_pretty() {
        let resolved = load_with_sources_from(|_| None).unwrap();
        let mut out = Vec::new();
        write_resolved(&resolved, &mut out).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("\n  \""));
    }
}
