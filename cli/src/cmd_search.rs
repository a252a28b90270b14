// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io, sync::Arc};

use calview_core::{Calview, Event, SearchResultGroup, search_cancellable, task_slot};
use clap::{ArgMatches, Command, arg};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::render::Renderer;
use crate::util::OutputFormat;

/// Search events by title and description.
#[derive(Debug, Clone)]
pub struct CmdSearch {
    pub query: Option<String>,
    pub stdin: bool,
    pub output_format: OutputFormat,
}

impl CmdSearch {
    pub const NAME: &str = "search";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("s")
            .about("Search events by title and description")
            .arg(arg!([QUERY] "Text to look for").required_unless_present("stdin"))
            .arg(
                arg!(--stdin "Read queries from stdin, one per line")
                    .long_help(
                        "\
Read queries from stdin, one per line. Every line supersedes the search still running for the \
previous one, so only the results of the latest query are printed.",
                    )
                    .conflicts_with("QUERY"),
            )
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            query: matches.get_one::<String>("QUERY").cloned(),
            stdin: matches.get_flag("stdin"),
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, app: &Calview, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "searching events...");
        let renderer = Renderer::new(
            config.theme,
            app.view_config().time_zone.clone(),
            app.today(),
        );

        if self.stdin {
            let events = Arc::new(app.events().await?);
            let input = BufReader::new(tokio::io::stdin());
            let mut output = io::stdout();
            search_lines(events, input, &mut output, &renderer, self.output_format).await
        } else {
            let query = self.query.unwrap_or_default();
            let groups = app.search(&query).await?;
            let text = format_results(&query, &groups, &renderer, self.output_format)?;
            print!("{text}");
            Ok(())
        }
    }
}

/// Runs each line of `input` as a query, printing the results of the latest one to finish.
///
/// A query arriving while the previous one is still scanning cancels it. Once the input ends,
/// the results of the last query are awaited before returning.
pub async fn search_lines<R, W>(
    events: Arc<Vec<Event>>,
    input: R,
    output: &mut W,
    renderer: &Renderer,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>>
where
    R: AsyncBufRead + Unpin,
    W: io::Write,
{
    let (mut slot, mut rx) = task_slot::<(String, Vec<SearchResultGroup>)>();
    let mut lines = input.lines();
    let mut eof = false;
    let mut delivered = 0;

    loop {
        if eof && delivered == slot.generation() {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if !eof => match line? {
                Some(line) => {
                    let query = line.trim().to_string();
                    let events = events.clone();
                    slot.submit(move |token| {
                        search_cancellable(&events, &query, token).map(|groups| (query, groups))
                    });
                }
                None => eof = true,
            },
            done = rx.recv() => {
                let Some(done) = done else { break };
                delivered = done.generation;
                let (query, groups) = done.value;
                write!(output, "{}", format_results(&query, &groups, renderer, format)?)?;
                output.flush()?;
            }
        }
    }
    Ok(())
}

fn format_results(
    query: &str,
    groups: &[SearchResultGroup],
    renderer: &Renderer,
    format: OutputFormat,
) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({ "query": query, "results": groups });
            Ok(serde_json::to_string(&value)? + "\n")
        }
        OutputFormat::Table => Ok(renderer.search(groups)),
    }
}
