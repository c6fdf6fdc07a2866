//! HTML-fragment rendering of a domain listing
//!
//! Produces the fragment embedded in the intranet contact page: an
//! `<h2>`/`<h3>`/`<ul>` outline with users grouped by organizational unit
//! followed by every group and its members.

use std::fmt::Write;

use crate::listing::{DomainListing, GroupSection, UnitSection};

/// Escape text for interpolation into HTML content or attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the full listing fragment
pub fn render_listing(listing: &DomainListing) -> String {
    let mut out = String::new();

    out.push_str("<h2>Users</h2>\n");
    for unit in &listing.units {
        render_unit(&mut out, unit);
    }

    out.push_str("<h2>Groups</h2>\n");
    for group in &listing.groups {
        render_group(&mut out, group);
    }

    out
}

fn render_unit(out: &mut String, unit: &UnitSection) {
    let _ = writeln!(out, "<h3>{}</h3>", escape(&unit.org_unit));
    out.push_str("<ul>\n");
    for user in &unit.users {
        let aliases = if user.aliases.is_empty() {
            String::new()
        } else {
            format!(" ({})", escape(&user.aliases.join(" ")))
        };
        let _ = writeln!(
            out,
            "<li>{} {}{}</li>",
            escape(&user.full_name),
            escape(&user.primary_email),
            aliases
        );
    }
    out.push_str("</ul>\n");
}

fn render_group(out: &mut String, group: &GroupSection) {
    let _ = writeln!(
        out,
        "<h3>{} (<a target=\"_top\" href=\"{}\">{}</a>)</h3>",
        escape(&group.name),
        escape(&group.forum_url),
        escape(&group.local_part)
    );

    if !group.aliases.is_empty() {
        let _ = writeln!(out, "<p>Aliases: {}</p>", escape(&group.aliases.join(", ")));
    }

    // Withheld member lists are simply absent
    let Some(members) = &group.members else {
        return;
    };

    out.push_str("<ul>\n");
    for member in members {
        let mut line = escape(&member.email);
        if member.owner {
            line.push_str(" (Owner)");
        }
        if member.group {
            line.push_str(" (Group)");
        }
        let _ = writeln!(out, "<li>{}</li>", line);
    }
    out.push_str("</ul>\n");
}
