// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! UI copy catalog.
//!
//! Keys use hierarchical dot notation (`nav.about.board`). The tables are
//! compiled in and indexed once on first use; nothing mutates them afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::warn;

use crate::locale::{Locale, DEFAULT_LOCALE};

type Table = HashMap<&'static str, &'static str>;

struct Catalog {
	en: Table,
	fr: Table,
}

impl Catalog {
	fn from_entries(en: &[(&'static str, &'static str)], fr: &[(&'static str, &'static str)]) -> Self {
		Self {
			en: en.iter().copied().collect(),
			fr: fr.iter().copied().collect(),
		}
	}

	fn table(&self, locale: Locale) -> &Table {
		match locale {
			Locale::En => &self.en,
			Locale::Fr => &self.fr,
		}
	}

	fn lookup<'a>(&self, locale: Locale, key: &'a str) -> &'a str {
		if let Some(text) = self.table(locale).get(key) {
			return *text;
		}

		if let Some(text) = self.table(DEFAULT_LOCALE).get(key) {
			warn!(
				key,
				locale = %locale,
				fallback = %DEFAULT_LOCALE,
				"missing translation, falling back to default locale"
			);
			return *text;
		}

		warn!(key, "missing translation key");
		key
	}

	fn missing_keys(&self, locale: Locale) -> Vec<&'static str> {
		let target = self.table(locale);
		let mut missing: Vec<_> = self
			.table(DEFAULT_LOCALE)
			.keys()
			.filter(|key| !target.contains_key(*key))
			.copied()
			.collect();
		missing.sort_unstable();
		missing
	}
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog::from_entries(EN, FR));

/// Translate `key` into `locale`.
///
/// Falls back to the default-locale text, then to the key itself. Both
/// fallbacks are logged at `warn`; lookup never panics.
///
/// ```
/// use quadball_common_i18n::{t, Locale};
///
/// assert_eq!(t(Locale::Fr, "nav.events"), "Evenements");
/// assert_eq!(t(Locale::En, "no.such.key"), "no.such.key");
/// ```
pub fn t<'a>(locale: Locale, key: &'a str) -> &'a str {
	CATALOG.lookup(locale, key)
}

/// Default-locale keys with no entry in `locale`, sorted.
pub fn missing_keys(locale: Locale) -> Vec<&'static str> {
	CATALOG.missing_keys(locale)
}

/// Every key the default locale defines, sorted.
pub fn catalog_keys() -> Vec<&'static str> {
	let mut keys: Vec<_> = CATALOG.table(DEFAULT_LOCALE).keys().copied().collect();
	keys.sort_unstable();
	keys
}

const EN: &[(&str, &str)] = &[
	("seo.siteDescription", "Quadball Canada. Building community through sport across Canada."),
	("layout.skipLink", "Skip to content"),
	("layout.languageLabel", "Language"),
	("nav.announcements", "Announcements"),
	("nav.about", "About Us"),
	("nav.about.missionValues", "Mission & Values"),
	("nav.about.board", "Meet the Board"),
	("nav.about.staff", "Meet the Staff"),
	("nav.about.teams", "Our Teams"),
	("nav.about.whatIsQuadball", "What is Quadball?"),
	("nav.resources", "Resources"),
	("nav.resources.all", "All Resources"),
	("nav.resources.policies", "Policies"),
	("nav.events", "Events"),
	("nav.events.upcoming", "Upcoming Events"),
	("nav.events.host", "Host an Event"),
	("nav.getInvolved", "Get Involved"),
	("nav.getInvolved.findTeam", "Find a Team"),
	("nav.getInvolved.volunteer", "Volunteer Opportunities"),
	("nav.getInvolved.host", "Host an Event"),
	("nav.getInvolved.teamCanada", "Team Canada"),
	("cta.contact", "Contact"),
	("cta.store", "Store"),
	("cta.donate", "Donate"),
	("hero.title", "Quadball Canada"),
	("hero.subtitle", "Building community through sport across Canada."),
	("hero.cta", "Get Involved"),
	("support.title", "Support Quadball Canada"),
	(
		"support.description",
		"Your donation helps grow quadball nationwide and supports inclusive programs.",
	),
	("support.primaryCta", "Donate"),
	("support.secondaryCta", "Sponsorship"),
	("footer.getInvolved", "Get Involved"),
	("footer.findTeam", "Find a Team"),
	("footer.hostEvent", "Host an Event"),
	("footer.teamCanada", "Team Canada"),
	("footer.volunteer", "Volunteer"),
	("footer.explore", "Explore"),
	("footer.about", "About"),
	("footer.news", "Latest News"),
	("footer.events", "Events"),
	("footer.rules", "Rules"),
	("footer.followUs", "Follow Us"),
	("footer.contact", "Contact Us"),
	("utility.search", "Search"),
	("news.title", "News & Announcements"),
	("news.empty", "No news yet."),
	("news.backToNews", "Back to News"),
	("news.share", "Share"),
	("news.related", "Related Articles"),
	("events.upcomingLink", "View Upcoming Events"),
	("events.calendarIcs", "Add to Calendar (ICS)"),
	("contact.title", "Contact Us"),
	("contact.general.title", "General Inquiries"),
];

const FR: &[(&str, &str)] = &[
	(
		"seo.siteDescription",
		"Quadball Canada. Site officiel. Construire une communaute sportive partout au Canada.",
	),
	("layout.skipLink", "Aller au contenu"),
	("layout.languageLabel", "Langue"),
	("nav.announcements", "Communiques"),
	("nav.about", "A propos"),
	("nav.about.missionValues", "Mission et valeurs"),
	("nav.about.board", "Conseil d'administration"),
	("nav.about.staff", "Equipe"),
	("nav.about.teams", "Nos equipes"),
	("nav.about.whatIsQuadball", "Qu'est-ce que le quadball?"),
	("nav.resources", "Ressources"),
	("nav.resources.all", "Toutes les ressources"),
	("nav.resources.policies", "Politiques"),
	("nav.events", "Evenements"),
	("nav.events.upcoming", "Evenements a venir"),
	("nav.events.host", "Organiser un evenement"),
	("nav.getInvolved", "S'impliquer"),
	("nav.getInvolved.findTeam", "Trouver une equipe"),
	("nav.getInvolved.volunteer", "Benevolat"),
	("nav.getInvolved.host", "Organiser un evenement"),
	("nav.getInvolved.teamCanada", "Equipe Canada"),
	("cta.contact", "Nous joindre"),
	("cta.store", "Boutique"),
	("cta.donate", "Faire un don"),
	("hero.title", "Quadball Canada"),
	("hero.subtitle", "Une communaute sportive inclusive partout au Canada."),
	("hero.cta", "S'impliquer"),
	("support.title", "Soutenir Quadball Canada"),
	(
		"support.description",
		"Vos contributions aident a developper le quadball et a soutenir des programmes inclusifs.",
	),
	("support.primaryCta", "Faire un don"),
	("support.secondaryCta", "Commandites"),
	("footer.getInvolved", "S'impliquer"),
	("footer.findTeam", "Trouver une equipe"),
	("footer.hostEvent", "Organiser un evenement"),
	("footer.teamCanada", "Equipe Canada"),
	("footer.volunteer", "Benevolat"),
	("footer.explore", "Explorer"),
	("footer.about", "A propos"),
	("footer.news", "Nouvelles"),
	("footer.events", "Evenements"),
	("footer.rules", "Regles"),
	("footer.followUs", "Nous suivre"),
	("footer.contact", "Nous joindre"),
	("utility.search", "Recherche"),
	("news.title", "Nouvelles et communiqués"),
	("news.empty", "Aucune nouvelle pour le moment."),
	("news.backToNews", "Retour aux nouvelles"),
	("news.share", "Partager"),
	("news.related", "Articles connexes"),
	("events.upcomingLink", "Voir les événements à venir"),
	("events.calendarIcs", "Ajouter au calendrier (ICS)"),
	("contact.title", "Nous joindre"),
	("contact.general.title", "Demandes générales"),
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_english_copy() {
		assert_eq!(t(Locale::En, "nav.announcements"), "Announcements");
		assert_eq!(t(Locale::En, "nav.about"), "About Us");
		assert_eq!(t(Locale::En, "cta.contact"), "Contact");
		assert_eq!(t(Locale::En, "news.title"), "News & Announcements");
	}

	#[test]
	fn test_french_copy() {
		assert_eq!(t(Locale::Fr, "nav.announcements"), "Communiques");
		assert_eq!(t(Locale::Fr, "nav.getInvolved"), "S'impliquer");
		assert_eq!(t(Locale::Fr, "cta.donate"), "Faire un don");
		assert_eq!(t(Locale::Fr, "events.upcomingLink"), "Voir les événements à venir");
	}

	#[test]
	fn test_nested_keys() {
		assert_eq!(t(Locale::En, "nav.about.board"), "Meet the Board");
		assert_eq!(t(Locale::Fr, "nav.about.board"), "Conseil d'administration");
		assert_eq!(t(Locale::Fr, "contact.general.title"), "Demandes générales");
	}

	#[test]
	fn test_unknown_key_returns_key() {
		assert_eq!(t(Locale::Fr, "nav.nonexistent"), "nav.nonexistent");
		assert_eq!(t(Locale::En, ""), "");
	}

	#[test]
	fn test_falls_back_to_default_locale() {
		let catalog = Catalog::from_entries(&[("a", "English A"), ("b", "English B")], &[("a", "Francais A")]);
		assert_eq!(catalog.lookup(Locale::Fr, "a"), "Francais A");
		assert_eq!(catalog.lookup(Locale::Fr, "b"), "English B");
		assert_eq!(catalog.lookup(Locale::Fr, "c"), "c");
		assert_eq!(catalog.missing_keys(Locale::Fr), vec!["b"]);
		assert!(catalog.missing_keys(Locale::En).is_empty());
	}

	#[test]
	fn test_french_catalog_is_complete() {
		assert_eq!(missing_keys(Locale::Fr), Vec::<&str>::new());
	}

	#[test]
	fn test_tables_have_no_duplicate_keys() {
		assert_eq!(CATALOG.en.len(), EN.len());
		assert_eq!(CATALOG.fr.len(), FR.len());
		assert_eq!(catalog_keys().len(), EN.len());
	}
}
