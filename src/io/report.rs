// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Printable HTML layout report.
//!
//! The report shows the blueprint with zone outlines and numbered anchor
//! markers on top, the per-zone anchor counts, and a disclaimer about
//! real-world placement accuracy. Manual and generated anchors get
//! different marker styles.

use crate::models::{anchor::Anchor, zone::Zone};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;

/// Disclaimer printed under the blueprint.
pub const DISCLAIMER: &str = "The locations of the anchors may differ in reality, \
     but this does not depend entirely on this blueprint.";

const STYLE: &str = r#"
    @media print {
      @page { margin: 20mm; }
      body { margin: 0; }
      .container { page-break-inside: avoid; }
    }
    .container { font-family: system-ui, -apple-system, sans-serif; padding: 20px; }
    .header { margin-bottom: 20px; padding-bottom: 20px; border-bottom: 1px solid #ccc; }
    .title { font-size: 24px; font-weight: bold; color: #333; }
    .info { margin: 20px 0; color: #666; }
    .zones { margin: 20px 0; padding: 15px; background: #f9fafb; border-radius: 8px; }
    .blueprint-container {
        position: relative; margin: 20px 0; border: 1px solid #ccc; overflow: hidden;
    }
    .blueprint { width: 100%; height: auto; display: block; }
    .zone-marker { position: absolute; border: 1px dashed #22c55e; z-index: 1; }
    .zone-label {
      position: absolute; background: white; color: #22c55e; border: 1px solid #22c55e;
      padding: 2px 8px; border-radius: 4px; font-size: 12px; font-weight: 600;
      transform: translate(0, -150%); z-index: 2;
    }
    .anchor-dot {
      position: absolute; width: 8px; height: 8px; border-radius: 50%;
      transform: translate(-50%, -50%); z-index: 2;
    }
    .anchor-dot.manual {
        background-color: #a855f7; box-shadow: 0 0 0 2px white, 0 0 0 3px #a855f7;
    }
    .anchor-dot.auto { background-color: #3b82f6; box-shadow: 0 0 0 2px white, 0 0 0 3px #3b82f6; }
    .anchor-label {
      position: absolute; font-size: 10px; color: #1f2937; font-weight: 600;
      transform: translate(-50%, -150%); background: white; padding: 2px 4px;
      border-radius: 4px; white-space: nowrap; border: 1px solid #e5e7eb; z-index: 2;
    }
    .disclaimer {
      margin-top: 20px; padding: 12px 16px; background-color: #fff7ed;
      border: 1px solid #fdba74; border-radius: 8px; color: #c2410c; font-size: 14px;
    }
"#;

/// Everything the report shows.
pub struct Report<'a> {
    pub project_name: &'a str,
    /// Square meters.
    pub project_area: f64,
    /// Value of the blueprint `<img src>`, usually a `file://` URL.
    pub image_src: &'a str,
    pub zones: &'a [Zone],
    pub anchors: &'a [Anchor],
}

/// Render the report as a standalone HTML document.
pub fn render_html(report: &Report<'_>) -> String {
    let name = escape_html(report.project_name);
    let mut html = String::with_capacity(4096 + report.anchors.len() * 256);

    // Writing into a String cannot fail.
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{name} - Blueprint</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n<div class=\"container\">\n"
    );
    let _ = writeln!(html, "<div class=\"header\"><div class=\"title\">{name}</div></div>");
    let _ = writeln!(
        html,
        "<div class=\"info\"><div>Project Area: {} m²</div><div>Total Anchors: {}</div></div>",
        report.project_area,
        report.anchors.len()
    );

    html.push_str("<div class=\"zones\">\n<h3>Distribution Zones:</h3>\n");
    for zone in report.zones {
        let _ = writeln!(
            html,
            "<div>{}: {} anchors</div>",
            escape_html(&zone.name),
            zone.anchor_count(report.anchors)
        );
    }
    html.push_str("</div>\n");

    let _ = writeln!(
        html,
        "<div class=\"blueprint-container\">\n<img src=\"{}\" class=\"blueprint\" />",
        escape_html(report.image_src)
    );
    for zone in report.zones {
        let _ = writeln!(
            html,
            "<div class=\"zone-marker\" \
             style=\"left: {}%; top: {}%; width: {}%; height: {}%;\">\
             <div class=\"zone-label\">{}</div></div>",
            zone.x,
            zone.y,
            zone.width,
            zone.height,
            escape_html(&zone.name)
        );
    }
    for (index, anchor) in report.anchors.iter().enumerate() {
        let class = if anchor.is_manual { "manual" } else { "auto" };
        let _ = writeln!(
            html,
            "<div class=\"anchor-dot {class}\" style=\"left: {x}%; top: {y}%;\"></div>\
             <div class=\"anchor-label\" style=\"left: {x}%; top: {y}%;\">{n}</div>",
            x = anchor.x,
            y = anchor.y,
            n = index + 1
        );
    }
    html.push_str("</div>\n");

    let _ = writeln!(
        html,
        "<div class=\"disclaimer\"><strong>Disclaimer:</strong> {DISCLAIMER}</div>"
    );
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

/// Render the report and write it to `path`.
pub fn write_report(report: &Report<'_>, path: &Path) -> Result<()> {
    std::fs::write(path, render_html(report)).with_context(|| format!("writing {}", path.display()))
}

fn escape_html(text: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::point::Point;

    fn sample() -> (Vec<Zone>, Vec<Anchor>) {
        let zones = vec![
            Zone::new("zone-0", "Dock <A>", 0.0, 0.0, 50.0, 50.0),
            Zone::new("zone-1", "Yard", 60.0, 60.0, 30.0, 30.0),
        ];
        let anchors = vec![
            Anchor::manual("manual-anchor-0", Point::new(10.0, 10.0), 0.05),
            Anchor::generated("anchor-0", Point::new(20.0, 20.0), 0.05),
            Anchor::generated("anchor-1", Point::new(70.0, 70.0), 0.05),
        ];
        (zones, anchors)
    }

    #[test]
    fn test_report_content() {
        let (zones, anchors) = sample();
        let html = render_html(&Report {
            project_name: "Site & Co",
            project_area: 750.0,
            image_src: "file:///tmp/plan.png",
            zones: &zones,
            anchors: &anchors,
        });

        assert!(html.contains("<title>Site &amp; Co - Blueprint</title>"));
        assert!(html.contains("Project Area: 750 m²"));
        assert!(html.contains("Total Anchors: 3"));
        assert!(html.contains("Dock &lt;A&gt;: 2 anchors"));
        assert!(html.contains("Yard: 1 anchors"));
        assert!(html.contains("src=\"file:///tmp/plan.png\""));
        assert_eq!(html.matches("anchor-dot manual").count(), 1);
        assert_eq!(html.matches("anchor-dot auto").count(), 2);
        assert!(html.contains(DISCLAIMER));
        assert!(!html.contains("<A>"));
    }

    #[test]
    fn test_write_report() {
        let (zones, anchors) = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.html");
        let report = Report {
            project_name: "Site",
            project_area: 100.0,
            image_src: "plan.png",
            zones: &zones,
            anchors: &anchors,
        };
        write_report(&report, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), render_html(&report));
    }
}
