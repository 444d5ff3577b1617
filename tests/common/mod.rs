// tests/common/mod.rs
//
// Builders for page fragments shaped like the portal's markup.
#![allow(dead_code)]

pub fn class_header(name: &str, period: u8, time: &str, teacher: &str) -> String {
    format!(
        concat!(
            r#"<div class="gb"><table><tr><td><span><a id='c{p}' name='c{p}' href="javascript:void(0)" >{name}</a></span></td></tr>"#,
            r#"<tr><td style="padding-left:10px"><label class="fXs fIl" style="padding-right:3px;width:auto">Period</label>{p}"#,
            r#"<span class='fXs fIl' style='padding-left:5px;'>{time}</span></td></tr>"#,
            r#"<tr><td style="padding-left:10px"><a id='t{p}' name='t{p}' href="javascript:void(0)" >{teacher}</a></td></tr></table></div></div>"#,
        ),
        p = period,
        name = name,
        time = time,
        teacher = teacher,
    )
}

pub fn graded(gid: u64, code: &str, grade: u32) -> String {
    format!(
        r#"{{"h":"<td><a id='g' name='g' data-sId='1' data-eId='2' data-cNI='3' data-trk='4' data-sec='5' data-gId='{gid}' data-bkt='{code}' data-lit='{code}' data-isEoc='no' href=\"javascript:void(0)\" >{grade}<\/a><\/td>"}},"#
    )
}

pub fn blank(gid: u64, code: &str) -> String {
    format!(
        r#"{{"h":"<td  style='cursor:pointer' class='fB emptyGrade' id='showGradeInfo' data-sId='1' data-eId='2' data-cNI='3' data-trk='4' data-sec='5' data-gId='{gid}' data-bkt='{code}' data-lit='{code}' data-pos='left'><div class='fIl'><\/div><\/td>"}},"#
    )
}

pub fn exam(grade: u32) -> String {
    format!(r#"{{"h":"<td><div class='fB'>{grade}<\/div><\/td>"}},"#)
}

/// One assignment row; `cells` are the grade columns, `&nbsp;` for empty.
pub fn assignment(gid: u64, name: &str, due: &str, code: &str, cells: &[&str]) -> String {
    let mut s = format!(
        concat!(
            r#"[{{"h":"<td><div><div><a id='showAssignmentInfo' name='showAssignmentInfo' data-sId='1' data-gId='{gid}' data-aId='7' href=\"javascript:void(0)\" >{name}<\/a>"#,
            r#"<\/br><label class=\"aD\">Due:<\/label><span class='fXs'>{due}&nbsp;&nbsp;({code})<\/span><\/div><\/div><\/td>"}},"#,
        ),
        gid = gid,
        name = name,
        due = due,
        code = code,
    );
    let cells: Vec<String> = cells
        .iter()
        .map(|c| format!(r#"{{"h":"<td class='aRt'><div class='height26 gW_{gid}_7'>{c}<\/div><\/td>"}}"#))
        .collect();
    s.push_str(&cells.join(","));
    s.push(']');
    s
}

pub fn event_row(date: &str, reason: &str, periods: &str, id: &str, inline: &str) -> String {
    format!(
        concat!(
            r#"<tr class="even"><td scope="row" style="white-space:nowrap">{}</td><td>{}</td>"#,
            r#"<td style="white-space:nowrap">{}</td><td><a id='{}' name='a' href="javascript:void(0)" >{}</a></td></tr>"#,
        ),
        date, reason, periods, id, inline
    )
}

pub fn class_block(id: &str, names: &[&str]) -> String {
    let links: Vec<String> = names
        .iter()
        .map(|n| format!(r#"<a id=\u0027k\u0027 name=\u0027k\u0027 href=\u0022javascript:void(0)\u0022 >{n}</a>"#))
        .collect();
    format!("{}\u{27});sff.sv(\u{27}#{id}\u{27});", links.join("<br />"))
}
