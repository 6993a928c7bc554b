use chrono::Datelike;

use crate::features::offers::models::Offer;
use crate::shared::constants::WINTER_SESSION;

/// Filter the loaded offers down to recommendation candidates for the
/// upcoming winter term.
///
/// An offer with no session is always a candidate. Otherwise the session must
/// be "hiver" (case-insensitive) and the start date, when present, must fall
/// in the year after `reference_year`. Pure and stateless; no server-side
/// filtering or pagination is involved.
pub fn winter_candidates(offers: &[Offer], reference_year: i32) -> Vec<Offer> {
    offers
        .iter()
        .filter(|offer| is_winter_candidate(offer, reference_year))
        .cloned()
        .collect()
}

fn is_winter_candidate(offer: &Offer, reference_year: i32) -> bool {
    let session = match &offer.session {
        Some(session) => session,
        None => return true,
    };

    if !session.eq_ignore_ascii_case(WINTER_SESSION) {
        return false;
    }

    match offer.start_date {
        Some(start) => start.year() == reference_year + 1,
        None => true,
    }
}
