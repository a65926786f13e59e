//! Split command.
//!
//! Reads a secret from a file or stdin and prints one encoded share per line.

use std::io::Read;

use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::SplitArgs;
use crate::core::config::Config;
use crate::core::shamir;
use crate::error::Result;

/// Split a secret into shares.
///
/// Flags override the values from the config file.
pub fn execute(args: SplitArgs, config: &Config) -> Result<()> {
    let parts = args.parts.unwrap_or(config.split.parts);
    let threshold = args.threshold.unwrap_or(config.split.threshold);
    let encoding = args.encoding.unwrap_or(config.split.encoding);

    let secret = Zeroizing::new(match &args.input {
        Some(path) => {
            debug!(path = %path.display(), "reading secret from file");
            std::fs::read(path)?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    });

    let shares: Vec<Zeroizing<Vec<u8>>> = shamir::split(&secret, parts, threshold)?
        .into_iter()
        .map(Zeroizing::new)
        .collect();
    let encoded: Vec<Zeroizing<String>> = shares
        .iter()
        .map(|s| Zeroizing::new(encoding.encode(s)))
        .collect();

    if args.json {
        let texts: Vec<&str> = encoded.iter().map(|s| s.as_str()).collect();
        let json = Zeroizing::new(serde_json::to_string_pretty(&texts)?);
        println!("{}", json.as_str());
    } else {
        for share in &encoded {
            println!("{}", share.as_str());
        }
    }

    output::success(&format!("split into {} shares", parts));
    output::hint(&format!("any {} of them recover the secret", threshold));

    Ok(())
}
