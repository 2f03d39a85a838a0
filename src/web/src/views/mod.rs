use lineup::{FormationType, ScreenSnapshot, SearchResultItem, Slot, Sport};

/// Shown for football results that come without a thumbnail.
pub const RESULT_THUMB_PLACEHOLDER: &str = "https://via.placeholder.com/150";

pub struct SlotView {
    pub id: u32,
    pub label: String,
    pub name: String,
    pub team: String,
    pub img: String,
    pub has_img: bool,
    pub active: bool,
    pub empty: bool,
    pub left: String,
    pub top: String,
}

impl SlotView {
    fn new(slot: &Slot, snapshot: &ScreenSnapshot) -> Self {
        SlotView {
            id: slot.id,
            label: slot.label.clone(),
            name: slot.name.clone(),
            team: slot.team.clone().unwrap_or_default(),
            img: slot.img.clone().unwrap_or_default(),
            has_img: slot.img.is_some(),
            active: snapshot.is_active(slot.id),
            empty: slot.is_unassigned(snapshot.sport),
            left: slot.coords.map(|c| c.left()).unwrap_or_default(),
            top: slot.coords.map(|c| c.top()).unwrap_or_default(),
        }
    }
}

pub struct ResultView {
    pub index: usize,
    pub name: String,
    pub team: String,
    pub thumb: String,
    pub has_thumb: bool,
}

impl ResultView {
    fn new(index: usize, item: &SearchResultItem, thumb_placeholder: Option<&str>) -> Self {
        let thumb = item.thumb.as_deref().or(thumb_placeholder);

        ResultView {
            index,
            name: item.name.clone().unwrap_or_default(),
            team: item.team.clone().unwrap_or_default(),
            thumb: thumb.unwrap_or_default().to_string(),
            has_thumb: thumb.is_some(),
        }
    }
}

/// Left-hand panel with the query input and the result list.
pub struct SearchPanel {
    pub sport: &'static str,
    pub enabled: bool,
    pub query: String,
    pub placeholder: &'static str,
    pub loading: bool,
    pub loading_text: &'static str,
    pub results: Vec<ResultView>,
    pub show_errors: bool,
    pub failure: String,
    pub failed: bool,
    pub thumb_placeholder: &'static str,
}

impl SearchPanel {
    pub fn new(snapshot: &ScreenSnapshot, show_errors: bool) -> Self {
        let thumb_placeholder = match snapshot.sport {
            Sport::Cricket => None,
            Sport::Football => Some(RESULT_THUMB_PLACEHOLDER),
        };

        let (active_placeholder, idle_placeholder, loading_text) = match snapshot.sport {
            Sport::Cricket => ("Type name...", "Click a card first", "Loading Stars..."),
            Sport::Football => (
                "Search player name...",
                "Select a position first",
                "Searching API...",
            ),
        };

        let failure = snapshot
            .search_status
            .as_ref()
            .filter(|status| status.is_failure())
            .map(|_| "Search is unavailable right now.".to_string());

        SearchPanel {
            sport: snapshot.sport.slug(),
            enabled: snapshot.input_enabled,
            query: snapshot.query.clone(),
            placeholder: if snapshot.input_enabled {
                active_placeholder
            } else {
                idle_placeholder
            },
            loading: snapshot.loading,
            loading_text,
            results: snapshot
                .results
                .iter()
                .enumerate()
                .map(|(index, item)| ResultView::new(index, item, thumb_placeholder))
                .collect(),
            show_errors,
            failed: show_errors && failure.is_some(),
            failure: failure.unwrap_or_default(),
            thumb_placeholder: thumb_placeholder.unwrap_or_default(),
        }
    }
}

pub struct FormationButton {
    pub name: &'static str,
    pub active: bool,
}

pub fn slot_views(snapshot: &ScreenSnapshot) -> Vec<SlotView> {
    snapshot
        .slots
        .iter()
        .map(|slot| SlotView::new(slot, snapshot))
        .collect()
}

pub fn formation_buttons(active: Option<FormationType>) -> Vec<FormationButton> {
    FormationType::all()
        .into_iter()
        .map(|formation| FormationButton {
            name: formation.display_name(),
            active: active == Some(formation),
        })
        .collect()
}
