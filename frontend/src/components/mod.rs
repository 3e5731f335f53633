pub mod nav;
pub mod problems {
    pub mod filters;
    pub mod pagination;
    pub mod problem_card;
    pub mod problem_modal;
    pub mod section;
}
pub mod teams {
    pub mod section;
    pub mod team_card;
    pub mod venue_filter;
}
pub mod jury {
    pub mod jury_card;
    pub mod section;
}
pub mod feedback {
    pub mod feedback_modal;
}
pub mod animated_count;
pub mod common_modal;
pub mod fallback_image;
pub mod footer;
pub mod particles;
pub mod scroll_indicator;
