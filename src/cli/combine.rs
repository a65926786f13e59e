//! Combine command.
//!
//! Decodes shares from arguments or stdin and writes the recovered secret.

use std::io::{BufRead, Write};

use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::CombineArgs;
use crate::core::config::Config;
use crate::core::shamir;
use crate::error::Result;

/// Recover a secret from shares.
///
/// The secret is written byte for byte, with no trailing newline. `config`
/// is `None` when no config file was found, and then only `--threshold`
/// enables the below-threshold warning.
pub fn execute(args: CombineArgs, config: Option<&Config>) -> Result<()> {
    let encoding = args
        .encoding
        .or(config.map(|c| c.split.encoding))
        .unwrap_or_default();
    let threshold = args.threshold.or(config.map(|c| c.split.threshold));

    let texts = if args.shares.is_empty() {
        debug!("reading shares from stdin");
        std::io::stdin()
            .lock()
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?
    } else {
        args.shares
    };

    let shares: Vec<Zeroizing<Vec<u8>>> = encoding
        .decode_all(&texts)?
        .into_iter()
        .map(Zeroizing::new)
        .collect();

    // combine() cannot detect this, so rely on the threshold we were told
    if let Some(threshold) = short_of(shares.len(), threshold) {
        debug!(shares = shares.len(), threshold, "fewer shares than the threshold");
        output::warn(&format!(
            "only {} shares given, threshold is {}: the output may not be the secret",
            shares.len(),
            threshold
        ));
    }

    let slices: Vec<&[u8]> = shares.iter().map(|s| s.as_slice()).collect();
    let secret = Zeroizing::new(shamir::combine(&slices)?);

    match &args.output {
        Some(path) => {
            std::fs::write(path, secret.as_slice())?;
            output::success(&format!("secret written to {}", path.display()));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&secret)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// The threshold, if one is known and `shares` falls short of it.
fn short_of(shares: usize, threshold: Option<usize>) -> Option<usize> {
    threshold.filter(|&t| shares < t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_of_known_threshold() {
        assert_eq!(short_of(3, Some(4)), Some(4));
        assert_eq!(short_of(4, Some(4)), None);
        assert_eq!(short_of(5, Some(4)), None);
    }

    #[test]
    fn test_short_of_unknown_threshold() {
        assert_eq!(short_of(2, None), None);
    }
}
