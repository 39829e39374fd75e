//! Map scene presenter
//!
//! Turns a decoded PSI snapshot into the three view-ready outputs: the
//! geocoded per-region index list, the national air-quality summary with its
//! outdoor-activity advisory, and the formatted refresh timestamp. The
//! presenter is a pure transformation plus a final emission into the
//! [`PsiView`] sink; it holds no state between calls other than the sink.

use serde::Serialize;
use tracing::debug;

use crate::models::{AirQuality, OutdoorActivityAdvise, PsiResponse};

/// Rendering sink consumed by the presenter.
///
/// Implemented by the rendering layer (a console view here, a map scene in a
/// GUI front) and by recording doubles in tests. Receivers are `&mut self`
/// so a double can record calls without interior mutability.
pub trait PsiView {
    fn show_index(&mut self, items: Vec<MapPsiIndexItem>);
    fn show_refresh_time(&mut self, text: String);
    fn show_air_quality_summary(&mut self, air_quality: AirQuality, advise: OutdoorActivityAdvise);
    fn show_error(&mut self);
    fn start_loading(&mut self);
    fn stop_loading(&mut self);
}

/// One map pin / list row per joined region
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MapPsiIndexItem {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub psi_twenty_four_hourly: u32,
    pub pm25_hourly: u32,
}

/// Presenter for the map scene. Owns its sink, set once at construction.
pub struct MapPresenter<V: PsiView> {
    view: V,
}

impl<V: PsiView> MapPresenter<V> {
    /// Wire the presenter to its sink
    #[must_use]
    pub fn new(view: V) -> Self {
        Self { view }
    }

    /// Consume the presenter and hand the sink back (used by tests to
    /// inspect a recording double)
    #[must_use]
    pub fn into_view(self) -> V {
        self.view
    }

    /// Present a decoded snapshot.
    ///
    /// Emits the joined index list, the air-quality summary, and the refresh
    /// time, in that order, synchronously on the calling thread. A snapshot
    /// with no readings emits nothing; absence of new data is not failure.
    /// Equal inputs always produce equal emissions.
    pub fn present_data(&mut self, response: &PsiResponse) {
        let Some(reading) = response.current_reading() else {
            debug!("snapshot has no readings, nothing to present");
            return;
        };

        let items: Vec<MapPsiIndexItem> = reading
            .regions
            .iter()
            .filter_map(|(name, sub_index)| {
                let metadata = response
                    .region_metadata
                    .iter()
                    .find(|metadata| metadata.name == *name)?;
                if metadata.location.is_unset() {
                    return None;
                }
                Some(MapPsiIndexItem {
                    name: name.clone(),
                    latitude: metadata.location.latitude,
                    longitude: metadata.location.longitude,
                    psi_twenty_four_hourly: sub_index.psi_twenty_four_hourly,
                    pm25_hourly: sub_index.pm25_hourly,
                })
            })
            .collect();

        let air_quality = AirQuality::from_psi(reading.national.psi_twenty_four_hourly);
        let advise = OutdoorActivityAdvise::from(air_quality);

        debug!(
            regions = items.len(),
            psi = reading.national.psi_twenty_four_hourly,
            %air_quality,
            "presenting snapshot"
        );

        self.view.show_index(items);
        self.view.show_air_quality_summary(air_quality, advise);
        self.view.show_refresh_time(reading.refresh_time_label());
    }

    /// Notify the sink that an error state should be displayed. Stateless
    /// and idempotent; the caller decides when a failure is user-visible.
    pub fn present_error(&mut self) {
        self.view.show_error();
    }

    /// Relay the loading state to the sink. Exactly one notification per
    /// call: started for `true`, stopped for `false`.
    pub fn present_loading_state(&mut self, is_loading: bool) {
        if is_loading {
            self.view.start_loading();
        } else {
            self.view.stop_loading();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PsiResponse;

    #[derive(Debug, Default)]
    struct CountingView {
        index_calls: usize,
        refresh_calls: usize,
        summary_calls: usize,
        error_calls: usize,
        start_calls: usize,
        stop_calls: usize,
    }

    impl PsiView for CountingView {
        fn show_index(&mut self, _items: Vec<MapPsiIndexItem>) {
            self.index_calls += 1;
        }
        fn show_refresh_time(&mut self, _text: String) {
            self.refresh_calls += 1;
        }
        fn show_air_quality_summary(
            &mut self,
            _air_quality: AirQuality,
            _advise: OutdoorActivityAdvise,
        ) {
            self.summary_calls += 1;
        }
        fn show_error(&mut self) {
            self.error_calls += 1;
        }
        fn start_loading(&mut self) {
            self.start_calls += 1;
        }
        fn stop_loading(&mut self) {
            self.stop_calls += 1;
        }
    }

    fn empty_response() -> PsiResponse {
        PsiResponse::parse(br#"{"region_metadata": [], "items": []}"#)
            .expect("empty snapshot should decode")
    }

    #[test]
    fn test_present_data_without_readings_emits_nothing() {
        let mut presenter = MapPresenter::new(CountingView::default());
        presenter.present_data(&empty_response());

        let view = presenter.into_view();
        assert_eq!(view.index_calls, 0);
        assert_eq!(view.refresh_calls, 0);
        assert_eq!(view.summary_calls, 0);
    }

    #[test]
    fn test_present_error_notifies_once() {
        let mut presenter = MapPresenter::new(CountingView::default());
        presenter.present_error();
        assert_eq!(presenter.into_view().error_calls, 1);
    }

    #[test]
    fn test_present_loading_state_relays_exactly_one_notification() {
        let mut presenter = MapPresenter::new(CountingView::default());
        presenter.present_loading_state(true);

        presenter.present_loading_state(false);

        let view = presenter.into_view();
        assert_eq!(view.start_calls, 1);
        assert_eq!(view.stop_calls, 1);
    }
}
