use crate::domain::entities::{Method, Protocol, RequestParameters};
use crate::domain::errors::PromptError;
use colored::Colorize;
use std::fmt::Display;
use std::io;
use tracing::debug;

const SEPARATOR: &str = "----------------------------------------";

/// Line-oriented console capability used by the collector
pub trait Prompter {
    /// Writes `text` without a trailing newline and flushes.
    fn write(&mut self, text: &str) -> io::Result<()>;

    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Reads one line without its terminator. `None` means end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// True when prompting for auth, headers and body is skipped: either forced
/// by the caller or implied by all six fields already being given.
pub fn skip_interactive(explicit: &RequestParameters, forced: bool) -> bool {
    forced
        || [
            &explicit.protocol,
            &explicit.url,
            &explicit.method,
            &explicit.auth,
            &explicit.headers,
            &explicit.body,
        ]
        .iter()
        .all(|field| !field.is_empty())
}

/// Uses `explicit` when non-empty. Otherwise runs `prompt`, or leaves the
/// field empty when there is no prompt to run.
fn resolve_field<F>(explicit: &str, prompt: Option<F>) -> Result<String, PromptError>
where
    F: FnOnce() -> Result<String, PromptError>,
{
    if !explicit.is_empty() {
        return Ok(explicit.to_string());
    }
    match prompt {
        Some(ask) => ask(),
        None => Ok(String::new()),
    }
}

/// Maps a 1-based menu answer to an index into a list of `len` entries.
fn parse_selection(answer: &str, len: usize) -> Option<usize> {
    let number: usize = answer.trim().parse().ok()?;
    (1..=len).contains(&number).then(|| number - 1)
}

/// Resolves the six request fields from explicit values and prompts.
pub struct ParameterCollector<'a> {
    prompter: &'a mut dyn Prompter,
}

impl<'a> ParameterCollector<'a> {
    pub fn new(prompter: &'a mut dyn Prompter) -> Self {
        Self { prompter }
    }

    /// Fields are resolved in order: protocol, url, method, auth, headers,
    /// body. Protocol, url and method are always prompted for when missing.
    /// Auth, headers and body stay empty in skip-interactive mode.
    pub fn collect(
        &mut self,
        explicit: &RequestParameters,
        skip_interactive: bool,
    ) -> Result<RequestParameters, PromptError> {
        let ask_optional = !skip_interactive;
        let mut params = RequestParameters::default();

        params.protocol = resolve_field(
            &explicit.protocol,
            Some(|| {
                self.select(&params, "Select Protocol:", &Protocol::ALL, "protocol")
                    .map(|p| p.to_string())
            }),
        )?;

        params.url = resolve_field(
            &explicit.url,
            Some(|| self.input(&params, "Enter URL: ", "url")),
        )?;

        params.method = resolve_field(
            &explicit.method,
            Some(|| {
                self.select(&params, "Select Request Type:", &Method::ALL, "request type")
                    .map(|m| m.to_string())
            }),
        )?;

        params.auth = resolve_field(
            &explicit.auth,
            ask_optional.then_some(|| {
                self.input(
                    &params,
                    "Enter Basic Auth credentials (username:password) or leave blank: ",
                    "auth",
                )
            }),
        )?;

        params.headers = resolve_field(
            &explicit.headers,
            ask_optional.then_some(|| {
                self.input(
                    &params,
                    "Enter Headers (Key:Value, separated by ';' or leave blank): ",
                    "headers",
                )
            }),
        )?;

        params.body = resolve_field(
            &explicit.body,
            ask_optional.then_some(|| self.input(&params, "Enter Body or leave blank: ", "body")),
        )?;

        debug!(
            protocol = %params.protocol,
            url = %params.url,
            method = %params.method,
            "parameters collected"
        );
        Ok(params)
    }

    /// Echoes what has been collected so far.
    fn show_summary(&mut self, params: &RequestParameters) -> io::Result<()> {
        self.prompter.write_line(SEPARATOR)?;
        self.prompter
            .write_line(&format!("{} {}", "Protocol:".bold(), params.protocol))?;
        self.prompter
            .write_line(&format!("{} {}", "URL:".bold(), params.url))?;
        self.prompter
            .write_line(&format!("{} {}", "Request Type:".bold(), params.method))?;
        self.prompter
            .write_line(&format!("{} {}", "Auth:".bold(), params.auth))?;
        self.prompter
            .write_line(&format!("{} {}", "Headers:".bold(), params.headers))?;
        self.prompter.write_line(SEPARATOR)
    }

    fn read_answer(&mut self, field: &'static str) -> Result<String, PromptError> {
        self.prompter
            .read_line()?
            .ok_or(PromptError::InputClosed { field })
    }

    /// Free-text prompt; the answer is trimmed and may be empty.
    fn input(
        &mut self,
        params: &RequestParameters,
        label: &str,
        field: &'static str,
    ) -> Result<String, PromptError> {
        self.show_summary(params)?;
        self.prompter.write(&label.cyan().to_string())?;
        Ok(self.read_answer(field)?.trim().to_string())
    }

    /// Numbered menu; asks again until the answer names one of `options`.
    fn select<T: Copy + Display>(
        &mut self,
        params: &RequestParameters,
        title: &str,
        options: &[T],
        field: &'static str,
    ) -> Result<T, PromptError> {
        self.show_summary(params)?;
        self.prompter.write_line(title)?;
        for (i, option) in options.iter().enumerate() {
            self.prompter.write_line(&format!(" {}. {}", i + 1, option))?;
        }

        loop {
            let label = format!("Enter the number corresponding to the {}: ", field);
            self.prompter.write(&label.cyan().to_string())?;
            let answer = self.read_answer(field)?;
            match parse_selection(&answer, options.len()) {
                Some(index) => return Ok(options[index]),
                None => {
                    debug!(answer = %answer.trim(), field, "selection out of range");
                    self.prompter.write_line(
                        &format!("Please enter a number between 1 and {}.", options.len())
                            .yellow()
                            .to_string(),
                    )?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Feeds canned answers and records everything written.
    #[derive(Default)]
    struct ScriptedPrompter {
        answers: VecDeque<String>,
        output: Vec<String>,
        reads: usize,
    }

    impl ScriptedPrompter {
        fn with_answers(answers: &[&str]) -> Self {
            colored::control::set_override(false);
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                ..Default::default()
            }
        }

        fn transcript(&self) -> String {
            self.output.concat()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn write(&mut self, text: &str) -> io::Result<()> {
            self.output.push(text.to_string());
            Ok(())
        }

        fn write_line(&mut self, text: &str) -> io::Result<()> {
            self.output.push(format!("{}\n", text));
            Ok(())
        }

        fn read_line(&mut self) -> io::Result<Option<String>> {
            self.reads += 1;
            Ok(self.answers.pop_front())
        }
    }

    fn explicit(fields: [&str; 6]) -> RequestParameters {
        RequestParameters {
            protocol: fields[0].to_string(),
            url: fields[1].to_string(),
            method: fields[2].to_string(),
            auth: fields[3].to_string(),
            headers: fields[4].to_string(),
            body: fields[5].to_string(),
        }
    }

    #[test]
    fn every_menu_entry_selects_its_value() {
        for (i, protocol) in Protocol::ALL.iter().enumerate() {
            for (j, method) in Method::ALL.iter().enumerate() {
                let index_p = (i + 1).to_string();
                let index_m = (j + 1).to_string();
                let mut prompter = ScriptedPrompter::with_answers(&[
                    index_p.as_str(),
                    "example.com",
                    index_m.as_str(),
                ]);
                let params = ParameterCollector::new(&mut prompter)
                    .collect(&RequestParameters::default(), true)
                    .unwrap();
                assert_eq!(params.protocol, protocol.as_str());
                assert_eq!(params.method, method.as_str());
            }
        }
    }

    #[test]
    fn all_fields_explicit_means_no_prompts() {
        let given = explicit([
            "https",
            "example.com/a",
            "POST",
            "alice:secret",
            "Accept:text/plain",
            "payload",
        ]);
        assert!(skip_interactive(&given, false));

        let mut prompter = ScriptedPrompter::with_answers(&[]);
        let params = ParameterCollector::new(&mut prompter)
            .collect(&given, skip_interactive(&given, false))
            .unwrap();

        assert_eq!(params, given);
        assert_eq!(prompter.reads, 0);
        assert!(prompter.output.is_empty());
    }

    #[test]
    fn forced_skip_leaves_optional_fields_empty() {
        let given = explicit(["http", "example.com/status", "GET", "", "", ""]);
        assert!(!skip_interactive(&given, false));

        let mut prompter = ScriptedPrompter::with_answers(&[]);
        let params = ParameterCollector::new(&mut prompter)
            .collect(&given, skip_interactive(&given, true))
            .unwrap();

        assert_eq!(params.protocol, "http");
        assert_eq!(params.url, "example.com/status");
        assert_eq!(params.method, "GET");
        assert!(params.auth.is_empty());
        assert!(params.headers.is_empty());
        assert!(params.body.is_empty());
        assert_eq!(prompter.reads, 0);
    }

    #[test]
    fn skip_mode_still_prompts_for_required_fields() {
        let mut prompter = ScriptedPrompter::with_answers(&["2", "  example.com/x  ", "3"]);
        let params = ParameterCollector::new(&mut prompter)
            .collect(&RequestParameters::default(), true)
            .unwrap();

        assert_eq!(params.protocol, "https");
        assert_eq!(params.url, "example.com/x");
        assert_eq!(params.method, "PUT");
        assert_eq!(params.auth, "");
        assert_eq!(prompter.reads, 3);
    }

    #[test]
    fn interactive_run_prompts_in_order() {
        let mut prompter = ScriptedPrompter::with_answers(&[
            "1",
            "example.com/items",
            "2",
            " bob:pw ",
            "Accept: */*;",
            "{\"n\":1}",
        ]);
        let params = ParameterCollector::new(&mut prompter)
            .collect(&RequestParameters::default(), false)
            .unwrap();

        assert_eq!(
            params,
            explicit([
                "http",
                "example.com/items",
                "POST",
                "bob:pw",
                "Accept: */*;",
                "{\"n\":1}",
            ])
        );

        let transcript = prompter.transcript();
        let order = [
            "Select Protocol:",
            "Enter URL: ",
            "Select Request Type:",
            "Enter Basic Auth credentials",
            "Enter Headers",
            "Enter Body",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|label| transcript.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn explicit_values_are_not_prompted_for() {
        let given = explicit(["", "example.com", "", "", "X:1", ""]);
        let mut prompter = ScriptedPrompter::with_answers(&["1", "8", "", ""]);
        let params = ParameterCollector::new(&mut prompter)
            .collect(&given, false)
            .unwrap();

        assert_eq!(params.url, "example.com");
        assert_eq!(params.method, "CONNECT");
        assert_eq!(params.headers, "X:1");
        assert_eq!(prompter.reads, 4);
        assert!(!prompter.transcript().contains("Enter URL"));
        assert!(!prompter.transcript().contains("Enter Headers"));
    }

    #[test]
    fn explicit_values_are_not_checked_against_menus() {
        let given = explicit(["ftp", "example.com", "TRACE", "", "", ""]);
        let mut prompter = ScriptedPrompter::with_answers(&[]);
        let params = ParameterCollector::new(&mut prompter)
            .collect(&given, true)
            .unwrap();

        assert_eq!(params.protocol, "ftp");
        assert_eq!(params.method, "TRACE");
    }

    #[test]
    fn out_of_range_selection_asks_again() {
        let mut prompter = ScriptedPrompter::with_answers(&["0", "3", "abc", "2"]);
        let params = ParameterCollector::new(&mut prompter)
            .collect(&explicit(["", "example.com", "GET", "", "", ""]), true)
            .unwrap();

        assert_eq!(params.protocol, "https");
        assert_eq!(prompter.reads, 4);
        assert_eq!(
            prompter
                .transcript()
                .matches("Please enter a number between 1 and 2.")
                .count(),
            3
        );
    }

    #[test]
    fn closed_input_aborts_collection() {
        let mut prompter = ScriptedPrompter::with_answers(&["1"]);
        let err = ParameterCollector::new(&mut prompter)
            .collect(&RequestParameters::default(), false)
            .unwrap_err();

        assert!(matches!(err, PromptError::InputClosed { field: "url" }));
    }

    #[test]
    fn summary_echoes_collected_fields() {
        let mut prompter = ScriptedPrompter::with_answers(&["", "", ""]);
        ParameterCollector::new(&mut prompter)
            .collect(&explicit(["https", "example.com", "GET", "", "", ""]), false)
            .unwrap();

        let transcript = prompter.transcript();
        assert!(transcript.contains("Protocol: https\n"));
        assert!(transcript.contains("URL: example.com\n"));
        assert!(transcript.contains("Request Type: GET\n"));
    }

    #[test]
    fn selection_parsing_bounds() {
        assert_eq!(parse_selection("1", 2), Some(0));
        assert_eq!(parse_selection(" 2\r", 2), Some(1));
        assert_eq!(parse_selection("0", 2), None);
        assert_eq!(parse_selection("3", 2), None);
        assert_eq!(parse_selection("-1", 2), None);
        assert_eq!(parse_selection("", 2), None);
    }
}
