// src/specs/gradebook.rs
//
// Gradebook page (sfgradebook001.w). Class headers are plain HTML; grade and
// assignment cells are embedded in JSON strings, so their markup arrives with
// escaped quotes (`\"`) and slashes (`<\/a>`).

use std::sync::LazyLock;

use regex::Regex;

use crate::core::sanitize::clean_text;
use crate::tokens::{AssignmentTuple, ClassHeader, GradeTuple};

/// Groups: name | period | time range | teacher
static CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"<a id='\w+' name='\w+' href="javascript:void\(0\)" >([^<]+)</a></span></td></tr>"#,
        r#"<tr><td style="padding-left:10px"><label class="[^"]*" style="padding-right:3px;width:auto">Period</label>(\d+)"#,
        r#"<span class='[^']*' style='padding-left:5px;'>([^<]+)</span></td></tr>"#,
        r#"<tr><td style="padding-left:10px"><a id='\w+' name='\w+' href="javascript:void\(0\)" >([^<]+)</a></td></tr></table></div></div>"#,
    ))
    .expect("class header pattern")
});

/// Three alternatives, tried left to right at each position:
/// 1-3: posted grade (gId | term code | grade)
/// 4-5: empty grade cell (gId | term code)
/// 6:   bare number with no term (semester exam)
static GRADE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?:<a id='\w+' name='\w+' data-sId='\w+' data-eId='\w+' data-cNI='\w+' data-trk='\w+' data-sec='\w+' data-gId='(\w+)' data-bkt='[\w ]+' data-lit='(\w+)' data-isEoc='\w+' href=\\"javascript:void\(0\)\\" >(\d+)<\\/a>)"#,
        r#"|(?:<td {2}style='cursor:pointer' class='fB emptyGrade' id='showGradeInfo' data-sId='\w+' data-eId='\w+' data-cNI='\w+' data-trk='\w+' data-sec='\w+' data-gId='(\w+)' data-bkt='[\w ]+' data-lit='(\w+)' data-pos='left'><div class='[\w _]+'><\\/div><\\/td>)"#,
        r#"|(?:<div class='\w+'>(\d+)<\\/div>)"#,
    ))
    .expect("grade pattern")
});

/// Groups: gId | assignment name | due date | term code. The grade cells that
/// follow are captured as part of the match and scanned separately.
static ASSIGNMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"<a id='showAssignmentInfo' name='showAssignmentInfo' data-sId='\w+' data-gId='(\w+)'[^>]*? href=\\"javascript:void\(0\)\\" >([^<]+)<\\/a>"#,
        r#"<\\/br><label [^>]*>Due:<\\/label><span [^>]*>(\w+\\/\w+\\/\w+)&nbsp;&nbsp;\((\w+)\)<\\/span><\\/div><\\/div><\\/td>"\},"#,
        r#"(?:\{"h":"<td class='[\w ]+'><div class='height26 gW_\w+'>(?:&nbsp;|[\w.]+)<\\/div><\\/td>"\},?)+\]"#,
    ))
    .expect("assignment pattern")
});

/// One grade cell inside an assignment block; its position depends on the term.
static ASSIGNMENT_CELL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div class='height26 gW_\w+'>(&nbsp;|[\w.]+)<\\/div>"#).expect("assignment cell pattern")
});

pub fn class_headers(html: &str) -> Vec<ClassHeader> {
    CLASS_RE
        .captures_iter(html)
        .map(|c| ClassHeader {
            name: clean_text(&c[1]),
            period: c[2].parse().unwrap_or(0),
            time_range: clean_text(&c[3]),
            teacher: clean_text(&c[4]),
        })
        .collect()
}

pub fn grade_tuples(html: &str) -> Vec<GradeTuple> {
    GRADE_RE
        .captures_iter(html)
        .filter_map(|c| {
            if let (Some(gid), Some(code), Some(grade)) = (c.get(1), c.get(2), c.get(3)) {
                Some(GradeTuple::Graded {
                    gid: s!(gid.as_str()),
                    code: s!(code.as_str()),
                    grade: s!(grade.as_str()),
                })
            } else if let Some(code) = c.get(5) {
                Some(GradeTuple::Blank {
                    gid: c.get(4).map(|m| s!(m.as_str())),
                    code: s!(code.as_str()),
                })
            } else {
                c.get(6).map(|grade| GradeTuple::Placeholder { grade: s!(grade.as_str()) })
            }
        })
        .collect()
}

pub fn assignment_tuples(html: &str) -> Vec<AssignmentTuple> {
    ASSIGNMENT_RE
        .captures_iter(html)
        .map(|c| AssignmentTuple {
            correlation_id: s!(&c[1]),
            name: clean_text(&c[2]),
            due_date_raw: s!(&c[3]),
            term_code: s!(&c[4]),
            grade_tokens: assignment_cells(&c[0]),
        })
        .collect()
}

/// Every grade cell of one assignment block, in order.
pub fn assignment_cells(block: &str) -> Vec<String> {
    ASSIGNMENT_CELL_RE
        .captures_iter(block)
        .map(|c| s!(&c[1]))
        .collect()
}
