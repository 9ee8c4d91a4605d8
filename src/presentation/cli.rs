use crate::application::collector::{ParameterCollector, Prompter};
use crate::application::services::HttpRequestService;
use crate::domain::entities::RequestParameters;
use crate::infrastructure::config::{RunConfig, warn_on_unlisted_values};
use crate::infrastructure::output;
use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tracing::debug;

/// Long flags that take a value.
const VALUE_FLAGS: [&str; 6] = ["protocol", "url", "requestType", "auth", "headers", "body"];

/// Long flags that may also be written with a single dash.
const SWITCH_FLAGS: [&str; 2] = ["noUI", "verbose"];

/// CLI configuration for wirecall
#[derive(Parser, Debug)]
#[command(name = "wirecall", version = "0.1.0")]
#[command(
    about = "Send one HTTP request, prompting for anything not given as a flag",
    long_about = None
)]
pub struct Cli {
    /// Protocol (http or https)
    #[arg(long, allow_hyphen_values = true)]
    pub protocol: Option<String>,

    /// URL without the scheme, e.g. example.com/status
    #[arg(long, allow_hyphen_values = true)]
    pub url: Option<String>,

    /// Request Type (GET, POST, PUT, DELETE, PATCH, HEAD, OPTIONS, CONNECT)
    #[arg(long = "requestType", allow_hyphen_values = true)]
    pub request_type: Option<String>,

    /// Basic Auth credentials (username:password)
    #[arg(long, allow_hyphen_values = true)]
    pub auth: Option<String>,

    /// Headers (Key:Value, separated by ';')
    #[arg(long, allow_hyphen_values = true)]
    pub headers: Option<String>,

    /// Body
    #[arg(long, allow_hyphen_values = true)]
    pub body: Option<String>,

    /// Skip the optional prompts and the output banners
    #[arg(long = "noUI")]
    pub no_ui: bool,

    /// Print diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Rewrites single-dash long flags (`-url x`, `-url=x`) into the double-dash
/// form clap expects. The argument after a value-taking flag is its value and
/// is never rewritten, and everything after a bare `--` is left alone.
pub fn normalize_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut normalized = Vec::new();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        if arg == "--" {
            normalized.push(arg);
            normalized.extend(args.by_ref());
            break;
        }

        let Some(rest) = arg.strip_prefix('-') else {
            normalized.push(arg);
            continue;
        };
        let name = rest.strip_prefix('-').unwrap_or(rest);
        let (name, inline_value) = match name.split_once('=') {
            Some((name, _)) => (name, true),
            None => (name, false),
        };
        let takes_value = VALUE_FLAGS.contains(&name);
        let known = takes_value || SWITCH_FLAGS.contains(&name);

        let takes_next = takes_value && !inline_value;
        if known && !rest.starts_with('-') {
            normalized.push(format!("-{}", arg));
        } else {
            normalized.push(arg);
        }
        if takes_next {
            if let Some(value) = args.next() {
                normalized.push(value);
            }
        }
    }
    normalized
}

impl Cli {
    /// Explicit values as given; missing flags become empty strings.
    pub fn explicit_parameters(&self) -> RequestParameters {
        RequestParameters {
            protocol: self.protocol.clone().unwrap_or_default(),
            url: self.url.clone().unwrap_or_default(),
            method: self.request_type.clone().unwrap_or_default(),
            auth: self.auth.clone().unwrap_or_default(),
            headers: self.headers.clone().unwrap_or_default(),
            body: self.body.clone().unwrap_or_default(),
        }
    }

    pub fn config(&self) -> RunConfig {
        RunConfig::new(self.explicit_parameters(), self.no_ui, self.verbose)
    }

    /// Collects parameters, performs the request and prints the outcome to
    /// `out`. Collection and request failures are printed, not returned;
    /// only a failure to write the output is an error.
    pub async fn run<W: Write>(
        &self,
        request_service: &HttpRequestService,
        prompter: &mut dyn Prompter,
        out: &mut W,
    ) -> Result<()> {
        let config = self.config();
        warn_on_unlisted_values(&config.explicit);
        debug!(skip_interactive = config.skip_interactive, "starting run");

        match Self::collect_and_send(&config, request_service, prompter).await {
            Ok(body) => output::write_response(out, &body, config.interactive())?,
            Err(err) => {
                debug!(error = %err, "run failed");
                output::write_error(out, &err, config.interactive())?;
            }
        }
        Ok(())
    }

    async fn collect_and_send(
        config: &RunConfig,
        request_service: &HttpRequestService,
        prompter: &mut dyn Prompter,
    ) -> Result<String> {
        let params =
            ParameterCollector::new(prompter).collect(&config.explicit, config.skip_interactive)?;
        request_service.execute(&params).await
    }
}
