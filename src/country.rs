//! Country name to flag code lookup.
//!
//! The table is an ordered list of `(name, code)` pairs, matched exactly
//! against the display name. Some names appear more than once ("East Timor"
//! carries both `tl` and `tp`); the first entry in table order wins. Codes
//! are returned lowercase regardless of how they are written in the table.

/// Flag code table, ordered by code.
const COUNTRY_CODES: &[(&str, &str)] = &[
    ("Ascension Island", "ac"),
    ("Andorra", "ad"),
    ("United Arab Emirates", "ae"),
    ("Afghanistan", "af"),
    ("Antigua and Barbuda", "ag"),
    ("Anguilla", "ai"),
    ("Albania", "al"),
    ("Armenia", "am"),
    ("Netherlands Antilles", "an"),
    ("Angola", "ao"),
    ("Antarctica", "aq"),
    ("Argentina", "ar"),
    ("American Samoa", "as"),
    ("Austria", "at"),
    ("Australia", "au"),
    ("Aruba", "aw"),
    ("Åland", "ax"),
    ("Azerbaijan", "az"),
    ("Bosnia and Herzegovina", "ba"),
    ("Barbados", "bb"),
    ("Bangladesh", "bd"),
    ("Belgium", "be"),
    ("Burkina", "bf"),
    ("Bulgaria", "bg"),
    ("Bahrain", "bh"),
    ("Burundi", "bi"),
    ("Benin", "bj"),
    ("Bermuda", "bm"),
    ("Brunei Darussalam", "bn"),
    ("Bolivia", "bo"),
    ("Brazil", "br"),
    ("Bahamas", "bs"),
    ("Bhutan", "bt"),
    ("Bouvet Island", "bv"),
    ("Botswana", "bw"),
    ("Belarus", "by"),
    ("Belize", "bz"),
    ("Canada", "ca"),
    ("Cocos (Keeling) Islands", "cc"),
    ("Democratic Republic of the Congo", "cd"),
    ("Central African Republic", "cf"),
    ("Republic of the Congo", "cg"),
    ("Switzerland", "ch"),
    ("Côte d'Ivoire", "ci"),
    ("Cook Islands", "ck"),
    ("Chile", "cl"),
    ("Cameroon", "cm"),
    ("People's Republic of China", "cn"),
    ("Colombia", "co"),
    ("Costa Rica", "cr"),
    ("Cuba", "cu"),
    ("Cape Verde", "cv"),
    ("Christmas Island", "cx"),
    ("Cyprus", "cy"),
    ("Czech Republic", "cz"),
    ("Germany", "de"),
    ("Djibouti", "dj"),
    ("Denmark", "dk"),
    ("Dominica", "dm"),
    ("Dominican Republic", "do"),
    ("Algeria", "dz"),
    ("Ecuador", "ec"),
    ("Estonia", "ee"),
    ("Egypt", "eg"),
    ("Eritrea", "er"),
    ("Spain", "es"),
    ("Ethiopia", "et"),
    ("Finland", "fi"),
    ("Fiji", "fj"),
    ("Falkland Islands", "fk"),
    ("Federated States of Micronesia", "fm"),
    ("Faroe Islands", "fo"),
    ("France", "fr"),
    ("Gabon", "ga"),
    ("Grenada", "gd"),
    ("Georgia", "ge"),
    ("French Guiana", "gf"),
    ("Guernsey", "gg"),
    ("Ghana", "gh"),
    ("Gibraltar", "gi"),
    ("Greenland", "gl"),
    ("The Gambia", "gm"),
    ("Guinea", "gn"),
    ("Guadeloupe", "gp"),
    ("Equatorial Guinea", "gq"),
    ("Greece", "gr"),
    ("South Georgia and the South Sandwich Islands", "gs"),
    ("Guatemala", "gt"),
    ("Guam", "gu"),
    ("Guinea-Bissau", "gw"),
    ("Guyana", "gy"),
    ("Hong Kong", "hk"),
    ("Heard Island and McDonald Islands", "hm"),
    ("Honduras", "hn"),
    ("Croatia", "hr"),
    ("Haiti", "ht"),
    ("Hungary", "hu"),
    ("Indonesia", "id"),
    ("Ireland", "ie"),
    ("Israel", "il"),
    ("Isle of Man", "im"),
    ("India", "in"),
    ("British Indian Ocean Territory", "io"),
    ("Iraq", "iq"),
    ("Iran", "ir"),
    ("Iceland", "is"),
    ("Italy", "it"),
    ("Jersey", "je"),
    ("Jamaica", "jm"),
    ("Jordan", "jo"),
    ("Japan", "jp"),
    ("Kenya", "ke"),
    ("Kyrgyzstan", "kg"),
    ("Cambodia", "kh"),
    ("Kiribati", "ki"),
    ("Comoros", "km"),
    ("Saint Kitts and Nevis", "kn"),
    ("Democratic People's Republic of Korea", "kp"),
    ("Republic of Korea", "kr"),
    ("Kuwait", "kw"),
    ("Cayman Islands", "ky"),
    ("Kazakhstan", "kz"),
    ("Laos", "la"),
    ("Lebanon", "lb"),
    ("Saint Lucia", "lc"),
    ("Liechtenstein", "li"),
    ("Sri Lanka", "lk"),
    ("Liberia", "lr"),
    ("Lesotho", "ls"),
    ("Lithuania", "lt"),
    ("Luxembourg", "lu"),
    ("Latvia", "lv"),
    ("Libya", "ly"),
    ("Morocco", "ma"),
    ("Monaco", "mc"),
    ("Moldova", "md"),
    ("Montenegro", "me"),
    ("Madagascar", "mg"),
    ("Marshall Islands", "mh"),
    ("Republic of Macedonia", "mk"),
    ("Mali", "ml"),
    ("Myanmar", "mm"),
    ("Mongolia", "mn"),
    ("Macau", "mo"),
    ("Northern Mariana Islands", "mp"),
    ("Martinique", "mq"),
    ("Mauritania", "mr"),
    ("Montserrat", "ms"),
    ("Malta", "mt"),
    ("Mauritius", "mu"),
    ("Maldives", "mv"),
    ("Malawi", "mw"),
    ("Mexico", "mx"),
    ("Malaysia", "my"),
    ("Mozambique", "mz"),
    ("Namibia", "na"),
    ("New Caledonia", "nc"),
    ("Niger", "ne"),
    ("Norfolk Island", "nf"),
    ("Nigeria", "ng"),
    ("Nicaragua", "ni"),
    ("Netherlands", "nl"),
    ("Norway", "no"),
    ("Nepal", "np"),
    ("Nauru", "nr"),
    ("Niue", "nu"),
    ("New Zealand", "nz"),
    ("Oman", "om"),
    ("Panama", "pa"),
    ("Peru", "pe"),
    ("French Polynesia", "pf"),
    ("Papua New Guinea", "pg"),
    ("Philippines", "ph"),
    ("Pakistan", "pk"),
    ("Poland", "pl"),
    ("Saint-Pierre and Miquelon", "pm"),
    ("Pitcairn Islands", "pn"),
    ("Puerto Rico", "pr"),
    ("Palestinian territories West Bank", "ps"),
    ("Portugal", "pt"),
    ("Palau", "pw"),
    ("Paraguay", "py"),
    ("Qatar", "qa"),
    ("Réunion", "re"),
    ("Romania", "ro"),
    ("Serbia", "rs"),
    ("Russia", "ru"),
    ("Rwanda", "rw"),
    ("Saudi Arabia", "sa"),
    ("Solomon Islands", "sb"),
    ("Seychelles", "sc"),
    ("Sudan", "sd"),
    ("Sweden", "se"),
    ("Singapore", "sg"),
    ("Saint Helena", "sh"),
    ("Slovenia", "si"),
    ("Svalbard and Jan Mayen", "sj"),
    ("Slovakia", "sk"),
    ("Sierra Leone", "sl"),
    ("San Marino", "sm"),
    ("Senegal", "sn"),
    ("Somalia", "so"),
    ("Suriname", "sr"),
    ("São Tomé and Príncipe", "st"),
    ("Soviet Union", "su"),
    ("El Salvador", "sv"),
    ("Syria", "sy"),
    ("Swaziland", "sz"),
    ("Turks and Caicos Islands", "tc"),
    ("Chad", "td"),
    ("French Southern and Antarctic", "tf"),
    ("Togo", "tg"),
    ("Thailand", "th"),
    ("Tajikistan", "tj"),
    ("Tokelau", "tk"),
    ("East Timor", "tl"),
    ("Turkmenistan", "tm"),
    ("Tunisia", "tn"),
    ("Tonga", "to"),
    ("East Timor", "tp"),
    ("Turkey", "tr"),
    ("Trinidad and Tobago", "tt"),
    ("Tuvalu", "tv"),
    ("Republic of China (Taiwan)", "tw"),
    ("Tanzania", "tz"),
    ("Ukraine", "ua"),
    ("Uganda", "ug"),
    ("England", "uk"),
    ("United Kingdom", "uk"),
    ("United States", "us"),
    ("Uruguay", "uy"),
    ("Uzbekistan", "uz"),
    ("Vatican City", "va"),
    ("Saint Vincent and the Grenadines", "vc"),
    ("Venezuela", "ve"),
    ("British Virgin Islands", "vg"),
    ("U.S. Virgin Islands", "vi"),
    ("Vietnam", "vn"),
    ("Vanuatu", "vu"),
    ("Wallis and Futuna", "wf"),
    ("Samoa", "ws"),
    ("Yemen", "ye"),
    ("Mayotte", "yt"),
    ("South Africa", "za"),
    ("Zambia", "zm"),
    ("Zimbabwe", "Zw"),
];

/// Resolve a country display name to its two-letter flag code.
///
/// Returns `None` for names outside the table; callers render without an
/// icon in that case.
pub fn resolve(country: &str) -> Option<String> {
    COUNTRY_CODES
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, code)| code.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_names() {
        assert_eq!(resolve("Belgium").as_deref(), Some("be"));
        assert_eq!(resolve("United States").as_deref(), Some("us"));
        assert_eq!(resolve("Côte d'Ivoire").as_deref(), Some("ci"));
        assert_eq!(resolve("Réunion").as_deref(), Some("re"));
    }

    #[test]
    fn unknown_names_have_no_code() {
        assert_eq!(resolve("Atlantis"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn match_is_exact() {
        assert_eq!(resolve("belgium"), None);
        assert_eq!(resolve(" Belgium"), None);
    }

    #[test]
    fn zimbabwe_resolves_to_a_single_lowercase_code() {
        let first = resolve("Zimbabwe");
        let second = resolve("Zimbabwe");
        assert!(first.is_some());
        assert_eq!(first, second);
        let code = first.unwrap();
        assert_eq!(code, code.to_ascii_lowercase());
    }

    #[test]
    fn duplicate_names_take_the_first_entry() {
        assert_eq!(resolve("East Timor").as_deref(), Some("tl"));
    }

    #[test]
    fn aliases_share_a_code() {
        assert_eq!(resolve("England"), resolve("United Kingdom"));
    }

    #[test]
    fn every_code_is_two_letters() {
        for (name, code) in COUNTRY_CODES {
            assert_eq!(code.len(), 2, "bad code for {name}");
            assert!(code.chars().all(|c| c.is_ascii_alphabetic()));
        }
    }
}
