use std::borrow::Cow;

use post_stats_domain::{analysis::measure_for, config::Configuration, render::format_fragment};
use post_stats_ports::{request::RenderContext, settings::SettingsStore};

use crate::load::LoadConfiguration;

/// The content filter: inserts the statistics block into single-post renders.
pub struct RenderPostStats<'a> {
    store: &'a dyn SettingsStore,
}

impl<'a> RenderPostStats<'a> {
    pub fn new(store: &'a dyn SettingsStore) -> Self {
        Self { store }
    }

    /// Called by the host once per rendered content string.
    ///
    /// Content outside a single-post main-query render, or with every
    /// statistic disabled, is returned untouched. An unreadable store falls
    /// back to the default configuration.
    pub fn filter_content<'c>(&self, ctx: &dyn RenderContext, content: &'c str) -> Cow<'c, str> {
        if !(ctx.is_main_query() && ctx.is_single()) {
            log::debug!("skipping statistics: not a single-post main query");
            return Cow::Borrowed(content);
        }

        let config = LoadConfiguration::new(self.store).run().unwrap_or_else(|err| {
            log::warn!("falling back to default settings: {err}");
            Configuration::default()
        });
        render_with(&config, content)
    }
}

/// Applies `config` to `content` without consulting any host state.
pub fn render_with<'c>(config: &Configuration, content: &'c str) -> Cow<'c, str> {
    let Some(stats) = measure_for(content, config) else {
        log::debug!("every statistic disabled; content unchanged");
        return Cow::Borrowed(content);
    };
    match format_fragment(&stats, config) {
        Some(fragment) => {
            log::debug!(
                "inserting statistics at {}: words={} chars={} minutes={}",
                config.location,
                stats.word_count,
                stats.character_count,
                stats.read_minutes
            );
            Cow::Owned(config.location.place(&fragment, content))
        }
        None => Cow::Borrowed(content),
    }
}
