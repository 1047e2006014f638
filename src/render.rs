//! The JSP fragment OpenNMS includes on its start page.

use crate::conditions::Conditions;
use crate::config::Config;
use crate::nws::Alert;

const HTML_TOP: &str = r#"
<%@page language="java"
        contentType="text/html"
        session="true"
%>

<div class="panel panel-default">
        <div class="panel-heading">
                <h3 class="panel-title">Current Weather</h3>
        </div>
<br>
"#;

const HTML_BOTTOM: &str = r#"
</div>
"#;

/// Renders the fragment. `show_radar` controls the radar image tag; the caller
/// clears it when the radar is disabled or its download failed.
pub fn render(
    config: &Config,
    conditions: &Conditions,
    alerts: &[Alert],
    show_radar: bool,
) -> String {
    let c = conditions;
    let unit = config.unit;
    let mut lines = vec![
        HTML_TOP.to_string(),
        r#"<ul style="list-style-type:none">"#.to_string(),
        format!(
            r#"<li><img src="{}" alt="Current Conditions"></li>"#,
            escape(&c.icon)
        ),
        format!(
            "<br><li><b>Current Conditions: {}</b></li>",
            escape(&c.description)
        ),
        format!("<li><b>Temperature: {}</b></li>", c.temperature.in_unit(unit)),
        format!("<li><b>WindChill: {}</b></li>", c.wind_chill.in_unit(unit)),
        format!("<li><b>HeatIndex: {}</b></li>", c.heat_index.in_unit(unit)),
        format!("<li><b>Dewpoint: {}</b></li>", c.dewpoint.in_unit(unit)),
        format!(
            "<li><b>Wind Speed: {} MPH Direction: {}</b></li>",
            c.wind_speed, c.wind_direction
        ),
        format!("<li><b>Wind Gust: {}</b></li>", c.wind_gust),
        format!("<li><b>Humidity: {}%</b></li>", c.humidity),
        format!("<li><b>Precipitation: {}</b></li>", c.precipitation),
    ];
    if alerts.is_empty() {
        lines.push(format!(
            "<li><b>There are currently no alerts for {}</b></li>",
            config.zone
        ));
    }
    lines.extend(alerts.iter().map(|alert| {
        format!(
            "<li><font color=red><b>{}</b></font></li>",
            escape(alert.title())
        )
    }));
    lines.push(format!(
        "<li>Observation Time {} - {}</li></ul>",
        escape(&c.timestamp),
        config.station
    ));
    if show_radar {
        lines.push(format!(
            r#"<hr><center><img src="{}"></center>"#,
            escape(&config.radar_src)
        ));
    }
    lines.push(HTML_BOTTOM.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
