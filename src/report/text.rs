use crate::catalog;
use crate::model::scores::ScoreResult;
use crate::report::chart::render_bar_chart;
use crate::report::domain_ratings;

pub fn render_report_text(result: &ScoreResult) -> String {
    let mut out = String::new();

    out.push_str("Gross National Happiness Index\n");
    out.push_str("==============================\n\n");

    out.push_str(&format!(
        "Gross National Happiness Index: {}\n",
        result.percentage_display()
    ));
    out.push_str(&format!("Band: {}\n", result.band.label()));
    out.push_str(&format!("{}\n\n", result.band.interpretation()));

    out.push_str("Your happiness by domain (0-5)\n");
    out.push_str(&render_bar_chart(&domain_ratings(result)));
    out.push_str(&format!(
        "Total: {} / {}\n\n",
        result.total, result.max_total
    ));

    out.push_str(
        "Your assessment is based on Bhutan's original model, adapted for personal use.\n\n",
    );
    out.push_str(&render_method_text());

    out
}

pub fn render_method_text() -> String {
    let mut out = String::new();
    out.push_str("How is this index calculated?\n");
    out.push_str(
        "This index is inspired by Bhutan's Gross National Happiness (GNH), which considers nine essential domains:\n\n",
    );
    for (i, d) in catalog::domains().iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, d.name));
    }
    out.push('\n');
    out.push_str(&format!(
        "Each domain is rated on a scale from {} to {}. The ratings are added up and converted into a percentage of the maximum possible score.\n\n",
        catalog::MIN_RATING,
        catalog::MAX_RATING
    ));
    out.push_str(
        "The method aims to reflect holistic well-being beyond the economic, valuing the material as well as the emotional, social and environmental.\n",
    );
    out
}

pub fn render_domain_list() -> String {
    let mut out = String::new();
    for (i, d) in catalog::domains().iter().enumerate() {
        out.push_str(&format!("{}. {} ({})\n", i + 1, d.name, d.id));
        out.push_str(&format!("   also: {}\n", d.label));
        out.push_str(&format!("   {}\n", d.prompt));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
