//! `check` command: validate the active context under a spinner

use log::debug;
use std::time::Duration;

use crate::call::{CallContext, CallScope};
use crate::cli::CheckArgs;
use crate::context::{Context, ContextProvider};
use crate::error::{PlatError, Result};

/// Validate the active context and print a short summary
pub async fn run_check_command<P>(provider: &P, quiet: bool, args: &CheckArgs) -> Result<()>
where
    P: ContextProvider + ?Sized,
{
    let scope = CallScope::with_timeout(Duration::from_secs(args.timeout));
    let mut call = CallContext::new(provider, Some(scope), quiet)?;

    let context = call.context().clone();
    let label = format!("validate context {}", context.name);
    let host = call
        .run(&label, async { validate_url(&context.url).map(str::to_string) })
        .await?;

    debug!("Context '{}' points at host {}", context.name, host);
    print_summary(&context, &host);
    Ok(())
}

fn print_summary(context: &Context, host: &str) {
    println!("Context: {}", context.name);
    println!("  URL:    {}", context.url);
    println!("  Host:   {}", host);
    println!(
        "  Tenant: {}",
        context.tenant.as_deref().unwrap_or("<not set>")
    );
}

/// Check that `url` is an http(s) URL with a host, returning the host part
fn validate_url(url: &str) -> Result<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| {
            PlatError::InvalidUrl(format!("'{}' must start with http:// or https://", url))
        })?;

    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_userinfo, host_port)| host_port);

    let (host, port) = if let Some(bracketed) = host_port.strip_prefix('[') {
        let (host, after) = bracketed.split_once(']').ok_or_else(|| {
            PlatError::InvalidUrl(format!("'{}' has an unterminated IPv6 address", url))
        })?;
        match after {
            "" => (host, None),
            _ => match after.strip_prefix(':') {
                Some(port) => (host, Some(port)),
                None => {
                    return Err(PlatError::InvalidUrl(format!(
                        "'{}' has unexpected text after the IPv6 address",
                        url
                    )))
                }
            },
        }
    } else {
        match host_port.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    };

    if let Some(port) = port.filter(|p| !p.is_empty()) {
        port.parse::<u16>().map_err(|_| {
            PlatError::InvalidUrl(format!("'{}' has an invalid port '{}'", url, port))
        })?;
    }

    if host.is_empty() {
        return Err(PlatError::InvalidUrl(format!("'{}' has no host", url)));
    }
    Ok(host)
}
