use astrokit_core::channels::{is_narrowband, ChannelRow};
use astrokit_core::config::ScanConfig;
use astrokit_core::template::{PathTemplate, TemplateMatch};
use console::Style;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    channel: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            channel: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_matches(template: &PathTemplate, matches: &[TemplateMatch]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to(template.as_str()));
    println!();

    if matches.is_empty() {
        println!("  {}", s.disabled.apply_to("no matches"));
        return;
    }

    for m in matches {
        println!("  {}", s.path.apply_to(&m.path));
        for (name, value) in m.binding.iter() {
            println!(
                "    {:<12}{}",
                s.label.apply_to(name),
                s.value.apply_to(value)
            );
        }
    }
    println!();
}

pub fn print_rows(template: &PathTemplate, config: &ScanConfig, rows: &[ChannelRow]) {
    let s = Styles::new();
    let split = template.split();

    println!();
    println!("  {}", s.title.apply_to("Channel Files"));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Template"),
        s.path.apply_to(template.as_str())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Root"),
        s.path.apply_to(if split.root.is_empty() { "." } else { split.root.as_str() })
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Default ext"),
        s.value.apply_to(&config.default_extension)
    );
    println!();

    if rows.is_empty() {
        println!("  {}", s.disabled.apply_to("no matching files"));
        println!();
        return;
    }

    for row in rows {
        let token = if is_narrowband(&row.token) {
            s.channel.apply_to(row.token.as_str())
        } else {
            s.value.apply_to(row.token.as_str())
        };
        let extension = row.extension.as_deref().unwrap_or("default");
        let status = if row.active { "" } else { "exists" };
        println!(
            "  {:<10} {:<10} {} {}",
            token,
            s.label.apply_to(extension),
            s.path.apply_to(&row.label),
            s.disabled.apply_to(status)
        );
    }
    println!();
}
