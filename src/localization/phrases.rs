//! Built-in phrase bundles.
//!
//! Phrase keys follow a dotted `section.key` convention. The `pronouns.*`
//! section must cover every catalog key in [`crate::domain::pronouns`]; page
//! strings live under `pronounsPage.*` and shared strings under `common.*`.

/// Looks up an English phrase.
///
/// English is the reference bundle: every key resolvable anywhere is
/// resolvable here.
pub(super) fn english(key: &str) -> Option<&'static str> {
    let phrase = match key {
        "pronouns.coCos" => "Co / Cos",
        "pronouns.eEyEmEir" => "E / Ey / Em / Eir",
        "pronouns.faeFaer" => "Fae / Faer",
        "pronouns.heHimHis" => "He / Him / His",
        "pronouns.heHimHisTheyThemTheirs" => "He / Him / His / They / Them / Theirs",
        "pronouns.merMers" => "Mer / Mers",
        "pronouns.neNirNirs" => "Ne / Nir / Nirs",
        "pronouns.neeNerNers" => "Nee / Ner / Ners",
        "pronouns.perPers" => "Per / Pers",
        "pronouns.sheHerHers" => "She / Her / Hers",
        "pronouns.sheHerHersTheyThemTheirs" => "She / Her / Hers / They / Them / Theirs",
        "pronouns.theyThemTheirs" => "They / Them / Theirs",
        "pronouns.thonThons" => "Thon / Thons",
        "pronouns.veVerVis" => "Ve / Ver / Vis",
        "pronouns.viVir" => "Vi / Vir",
        "pronouns.xeXemXyr" => "Xe / Xem / Xyr",
        "pronouns.zeHirHirs" => "Ze / Hir / Hirs",
        "pronouns.zeZieZirHir" => "Ze / Zie / Zir / Hir",
        "pronouns.callMeByMyName" => "Call me by my name",
        "pronounsPage.pronouns" => "Pronouns",
        "pronounsPage.isShownOnProfile" => "Your pronouns are shown on your profile.",
        "pronounsPage.placeholderText" => "Search to see options",
        "common.noResultsFound" => "No results found",
        "common.loading" => "Loading",
        _ => return None,
    };
    Some(phrase)
}

/// Looks up a Spanish phrase.
///
/// Pronoun sets themselves are not translated; only descriptive phrases
/// differ. Missing keys fall back to English in the caller.
pub(super) fn spanish(key: &str) -> Option<&'static str> {
    let phrase = match key {
        "pronouns.callMeByMyName" => "Llámame por mi nombre",
        "pronounsPage.pronouns" => "Pronombres",
        "pronounsPage.isShownOnProfile" => "Tus pronombres se muestran en tu perfil.",
        "pronounsPage.placeholderText" => "Busca para ver las opciones",
        "common.noResultsFound" => "No se encontraron resultados",
        "common.loading" => "Cargando",
        _ => return None,
    };
    Some(phrase)
}
