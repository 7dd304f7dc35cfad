use crate::model::lang::Lang;
use crate::model::venue::Venue;
use crate::utils::constants::{MAPS_URL, MESSAGE_LIMIT};
use teloxide::utils::html::{bold, escape};
use url::Url;

/// Google Maps link for the venue: coordinates when known, the address otherwise.
pub fn maps_link(venue: &Venue) -> Option<Url> {
    let query = match venue.coordinates() {
        Some((latitude, longitude)) => format!("{latitude},{longitude}"),
        None if !venue.address.is_empty() => venue.address.clone(),
        None => return None,
    };
    Url::parse_with_params(MAPS_URL, &[("q", query)]).ok()
}

fn push_line(text: &mut String, icon: &str, value: &str) {
    if !value.is_empty() {
        text.push_str(&format!("{icon} {}\n", escape(value)));
    }
}

/// One venue as Telegram HTML.
pub fn format_venue(venue: &Venue, lang: Lang, distance_km: Option<f64>) -> String {
    let code = lang.code();
    let mut text = format!("🏢 {}", bold(&escape(venue.name.resolve(code))));
    if let Some(area) = &venue.area {
        text.push_str(&format!(" ({})", escape(area)));
    }
    text.push('\n');

    match maps_link(venue) {
        Some(url) => text.push_str(&format!(
            "📍 <a href=\"{}\">{}</a>\n",
            escape(url.as_str()),
            escape(&venue.address)
        )),
        None => push_line(&mut text, "📍", &venue.address),
    }
    if let Some(window) = &venue.happy_hour {
        push_line(&mut text, "⏰", &window.to_string());
    }
    push_line(&mut text, "💰", venue.deal.resolve(code));
    push_line(&mut text, "🎯", venue.vibe.resolve(code));
    push_line(&mut text, "💳", venue.price_range.as_deref().unwrap_or_default());
    push_line(&mut text, "📝", venue.description.resolve(code));
    push_line(&mut text, "🕒", venue.hours.as_deref().unwrap_or_default());
    push_line(&mut text, "📞", venue.phone.as_deref().unwrap_or_default());
    push_line(&mut text, "🌐", venue.website.as_deref().unwrap_or_default());
    if let Some(distance_km) = distance_km {
        push_line(
            &mut text,
            "📏",
            &format!("{distance_km:.2} {}", lang.texts().km),
        );
    }
    text
}

/// Header followed by as many venues as fit into a single Telegram message.
pub fn format_listing<'a>(
    header: &str,
    venues: impl IntoIterator<Item = (&'a Venue, Option<f64>)>,
    lang: Lang,
) -> String {
    let footer = format!("\n{}", lang.texts().more_options);
    let mut text = format!("{}\n\n", escape(header));
    let mut length = text.chars().count() + footer.chars().count();

    for (venue, distance_km) in venues {
        let entry = format!("{}\n", format_venue(venue, lang, distance_km));
        let entry_length = entry.chars().count();
        if length + entry_length > MESSAGE_LIMIT {
            log::warn!("Listing truncated at {} characters", length);
            break;
        }
        length += entry_length;
        text.push_str(&entry);
    }

    text.push_str(&footer);
    text
}

/// Listing for a query result, or `empty_text` when nothing matched.
pub fn format_results(
    header: &str,
    venues: Vec<(&Venue, Option<f64>)>,
    lang: Lang,
    empty_text: &str,
) -> String {
    if venues.is_empty() {
        escape(empty_text)
    } else {
        format_listing(header, venues, lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::venue::sample_venues;
    use serde_json::json;

    #[test]
    fn test_maps_link() {
        let venues = sample_venues();
        assert_eq!(
            maps_link(&venues[0]).unwrap().as_str(),
            "https://www.google.com/maps?q=32.0778%2C34.7732"
        );

        let without_coordinates: Venue = serde_json::from_value(json!({
            "name": {"en": "Somewhere"},
            "address": "King George 7"
        }))
        .unwrap();
        assert_eq!(
            maps_link(&without_coordinates).unwrap().as_str(),
            "https://www.google.com/maps?q=King+George+7"
        );

        let nowhere: Venue =
            serde_json::from_value(json!({"name": {"en": "?"}, "address": ""})).unwrap();
        assert!(maps_link(&nowhere).is_none());
    }

    #[test]
    fn test_format_venue() {
        let venues = sample_venues();

        let text = format_venue(&venues[0], Lang::En, Some(0.918));

        assert!(text.starts_with("🏢 <b>Beer Garden</b> (Dizengoff)\n"));
        assert!(text.contains(
            "📍 <a href=\"https://www.google.com/maps?q=32.0778%2C34.7732\">Dizengoff 100</a>\n"
        ));
        assert!(text.contains("⏰ 17:00-19:00\n"));
        assert!(text.contains("🎯 Casual\n"));
        assert!(text.contains("💳 $$\n"));
        assert!(text.contains("🕒 12:00-02:00\n"));
        assert!(text.contains("📏 0.92 km\n"));
        assert!(!text.contains("📞"));
    }

    #[test]
    fn test_format_venue_in_hebrew() {
        let venues = sample_venues();
        let text = format_venue(&venues[0], Lang::He, None);
        assert!(text.contains("<b>ביר גארדן</b>"));
        assert!(text.contains("🎯 לא פורמלי\n"));
        assert!(!text.contains("📏"));
    }

    #[test]
    fn test_format_venue_escapes_html() {
        let venue: Venue = serde_json::from_value(json!({
            "name": {"en": "<Rock & Roll>"},
            "address": "Allenby 1",
            "deal": {"en": "2 > 1"}
        }))
        .unwrap();

        let text = format_venue(&venue, Lang::En, None);

        assert!(text.contains("<b>&lt;Rock &amp; Roll&gt;</b>"));
        assert!(text.contains("💰 2 &gt; 1\n"));
    }

    #[test]
    fn test_format_listing() {
        let venues = sample_venues();

        let text = format_listing(
            "🎉 Happy Hours in Rothschild:",
            venues[5..7].iter().map(|venue| (venue, None)),
            Lang::En,
        );

        assert!(text.starts_with("🎉 Happy Hours in Rothschild:\n\n🏢 <b>Cocktail Embassy</b>"));
        assert!(text.contains("<b>Boulevard Social</b>"));
        assert!(text.ends_with(Lang::En.texts().more_options));
    }

    #[test]
    fn test_format_results_when_empty() {
        let texts = Lang::En.texts();
        assert_eq!(
            format_results("header", vec![], Lang::En, texts.no_results),
            texts.no_results
        );

        let venues = sample_venues();
        let text = format_results(
            "header",
            vec![(&venues[0], None)],
            Lang::En,
            texts.no_results,
        );
        assert!(text.starts_with("header\n\n🏢"));
    }

    #[test]
    fn test_format_listing_fits_one_message() {
        let venues: Vec<Venue> = sample_venues().into_iter().cycle().take(60).collect();

        let text = format_listing("Everything", venues.iter().map(|venue| (venue, None)), Lang::He);

        assert!(text.chars().count() <= MESSAGE_LIMIT);
        assert!(text.ends_with(Lang::He.texts().more_options));
    }
}
