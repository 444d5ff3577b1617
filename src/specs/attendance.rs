// src/specs/attendance.rs
//
// Attendance page (sfattendance001.w). Event rows are plain table HTML. The
// class lists behind "View Classes" live in a script block with unicode-escaped
// quotes (`\u0027`, `\u0022`), each run of links followed by `#<event id>`.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::sanitize::clean_text;
use crate::tokens::{ClassBlock, EventRow};

/// Groups: date | reason | periods | event id | inline class (or "View Classes")
static EVENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"<tr class="(?:odd|even)"><td scope="row" style="white-space:nowrap">([^<]+)</td>"#,
        r#"<td>([^<]+)</td><td style="white-space:nowrap">([^<]+)</td>"#,
        r#"<td><a id='(\w+)' name='\w+' (?:style='white-space:nowrap' )?href="javascript:void\(0\)" >([^<]+)<"#,
    ))
    .expect("attendance event pattern")
});

/// Whole block of class links; group 1 is the trailing event id.
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?:<a id=\\\w+\\u0027 name=\\\w+\\u0027 href=\\u0022javascript:void\(0\)\\u0022 >[^<]+</a>(?:<br />)?)+"#,
        r#"[^#]+#(\w+)"#,
    ))
    .expect("attendance block pattern")
});

static BLOCK_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a id=\\\w+\\u0027 name=\\\w+\\u0027 href=\\u0022javascript:void\(0\)\\u0022 >([^<]+)</a>"#)
        .expect("attendance block class pattern")
});

pub fn event_rows(html: &str) -> Vec<EventRow> {
    EVENT_RE
        .captures_iter(html)
        .map(|c| EventRow {
            date: clean_text(&c[1]),
            reason: clean_text(&c[2]),
            periods: clean_text(&c[3]),
            id: s!(&c[4]),
            inline: clean_text(&c[5]),
        })
        .collect()
}

pub fn class_blocks(text: &str) -> Vec<ClassBlock> {
    BLOCK_RE
        .captures_iter(text)
        .map(|c| ClassBlock { id: s!(&c[1]), body: s!(&c[0]) })
        .collect()
}

/// Class names of one block, in the order they appear.
pub fn block_class_names(block: &ClassBlock) -> Vec<String> {
    BLOCK_CLASS_RE
        .captures_iter(&block.body)
        .map(|c| clean_text(&c[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(date: &str, reason: &str, periods: &str, id: &str, inline: &str) -> String {
        format!(
            concat!(
                r#"<tr class="odd"><td scope="row" style="white-space:nowrap">{}</td>"#,
                r#"<td>{}</td><td style="white-space:nowrap">{}</td>"#,
                r#"<td><a id='{}' name='x' style='white-space:nowrap' href="javascript:void(0)" >{}</a></td></tr>"#,
            ),
            date, reason, periods, id, inline
        )
    }

    fn link(name: &str) -> String {
        format!(r#"<a id=\u0027c1\u0027 name=\u0027c1\u0027 href=\u0022javascript:void(0)\u0022 >{name}</a>"#)
    }

    #[test]
    fn event_rows_keep_inline_value() {
        let html = format!(
            "{}{}",
            event("Mon Sep 11, 2023", "Excused", "1 2", "ev1", "View Classes"),
            event("Tue Sep 12, 2023", "Tardy", "3", "ev2", "CHEMISTRY"),
        );
        let rows = event_rows(&html);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "ev1");
        assert_eq!(rows[0].inline, "View Classes");
        assert_eq!(rows[1].inline, "CHEMISTRY");
        assert_eq!(rows[1].periods, "3");
    }

    #[test]
    fn blocks_split_on_trailing_id() {
        let text = format!(
            "{}<br />{}\u{27});$(\u{27}#ev1\u{27}) ... {}\u{27});$(\u{27}#ev7\u{27})",
            link("ENGLISH II"),
            link("AP BIOLOGY"),
            link("GEOMETRY"),
        );
        let blocks = class_blocks(&text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].id, "ev1");
        assert_eq!(block_class_names(&blocks[0]), vec![s!("ENGLISH II"), s!("AP BIOLOGY")]);
        assert_eq!(blocks[1].id, "ev7");
        assert_eq!(block_class_names(&blocks[1]), vec![s!("GEOMETRY")]);
    }
}
