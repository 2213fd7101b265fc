use std::path::Path;

use console::Style;
use dropcontour_core::droplet::{ContourRegions, VolumeEstimate};

use crate::commands::measure::ImageMeasurement;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_measure_summary(measurements: &[ImageMeasurement]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Droplet Measurements"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(20)));
    println!();

    for m in measurements {
        println!("  {}", s.path.apply_to(m.path.display()));
        println!(
            "    {:<12}{}",
            s.label.apply_to("Attempts"),
            s.value.apply_to(m.fit_attempts)
        );
        if m.summary.count == 0 {
            println!(
                "    {:<12}{}",
                s.label.apply_to("Ellipses"),
                s.disabled.apply_to("none")
            );
            println!();
            continue;
        }
        println!(
            "    {:<12}{}",
            s.label.apply_to("Ellipses"),
            s.value.apply_to(m.summary.count)
        );
        println!(
            "    {}",
            s.header.apply_to(format!(
                "{:>4}  {:>9}  {:>9}  {:>9}  {:>9}  {:>7}",
                "#", "Center X", "Center Y", "Major", "Minor", "Angle"
            ))
        );
        for (i, (cx, cy, major, minor, angle)) in m.summary.properties.iter().enumerate() {
            println!(
                "    {:>4}  {:>9.2}  {:>9.2}  {:>9.2}  {:>9.2}  {:>7.1}",
                i + 1,
                cx,
                cy,
                major,
                minor,
                angle
            );
        }
        println!();
    }
}

pub fn print_regions_summary(path: &Path, regions: &ContourRegions) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Contour Regions"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(15)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(path.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Traced"),
        s.value.apply_to(regions.hierarchy.len())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Kept"),
        s.value.apply_to(regions.len())
    );
    println!();

    if regions.is_empty() {
        return;
    }
    println!(
        "    {}",
        s.header
            .apply_to(format!("{:>4}  {:>10}  {:>8}  {:>8}", "#", "Area", "X", "Y"))
    );
    for (i, (area, centroid)) in regions.areas.iter().zip(&regions.centroids).enumerate() {
        println!(
            "    {:>4}  {:>10.1}  {:>8}  {:>8}",
            i + 1,
            area,
            centroid.x,
            centroid.y
        );
    }
    println!();
}

pub fn print_volume_summary(path: &Path, estimate: &VolumeEstimate) {
    let s = Styles::new();

    println!();
    println!("  {}", s.path.apply_to(path.display()));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Droplets"),
        s.value.apply_to(estimate.count)
    );
    for (i, (volume, diameter)) in estimate.volumes.iter().zip(&estimate.x_diameters).enumerate() {
        println!(
            "    {:<14}{}",
            s.label.apply_to(format!("Droplet {}", i + 1)),
            s.value
                .apply_to(format!("V = {volume:.1} \u{b5}m\u{b3}, D = {diameter:.2} \u{b5}m"))
        );
    }
    if estimate.y_diameters.is_empty() {
        println!(
            "    {:<14}{}",
            s.label.apply_to("Vertical"),
            s.disabled.apply_to("none")
        );
    } else {
        let formatted: Vec<String> = estimate
            .y_diameters
            .iter()
            .map(|d| format!("{d:.2}"))
            .collect();
        println!(
            "    {:<14}{}",
            s.label.apply_to("Vertical"),
            s.value.apply_to(formatted.join(", "))
        );
    }
}
