//! HTML pages for the event list and a single event.

use std::fmt::{self, Write};
use thiserror::Error;

use crate::models::Event;

#[derive(Debug, Error)]
#[error("failed to render page")]
pub struct RenderError(#[from] fmt::Error);

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<link rel="stylesheet" href="/static/style.css">
"#;

pub fn render_index(events: &[Event]) -> Result<String, RenderError> {
    let mut out = String::from(HEAD);
    out.push_str("<title>Events</title>\n</head>\n<body>\n<h1>Events</h1>\n<ul>\n");

    for event in events {
        writeln!(
            out,
            r#"<li><a href="/event/{}">{}</a></li>"#,
            event.id,
            escape(&event.name)
        )?;
    }

    out.push_str("</ul>\n</body>\n</html>\n");
    Ok(out)
}

pub fn render_event(event: &Event) -> Result<String, RenderError> {
    let name = escape(&event.name);
    let mut out = String::from(HEAD);
    writeln!(out, "<title>{}</title>\n</head>\n<body>", name)?;
    writeln!(out, "<h1>{}</h1>", name)?;
    out.push_str("<table>\n<tr><th>Ticket</th><th>Status</th><th></th></tr>\n");

    for ticket in &event.tickets {
        write!(
            out,
            r#"<tr class="{status}"><td>{id}</td><td>{status}</td><td>"#,
            id = ticket.id,
            status = ticket.status
        )?;
        if ticket.is_available() {
            write!(
                out,
                r#"<form method="post" action="/event/{}"><input type="hidden" name="ticket_id" value="{}"><button type="submit">Book</button></form>"#,
                event.id, ticket.id
            )?;
        }
        out.push_str("</td></tr>\n");
    }

    out.push_str("</table>\n<p><a href=\"/\">All events</a></p>\n</body>\n</html>\n");
    Ok(out)
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
