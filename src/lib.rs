pub mod constants;
pub mod error;
pub mod pivot;
pub mod postprocess;
pub mod request;
pub mod roman;
pub mod router;
pub mod script;
pub mod table;
pub mod tag_guard;
pub mod translit;

pub use error::{Result, TranslitError};
pub use request::ConversionRequest;
pub use router::{route, Engine, Pipeline, Stage};
pub use script::{detect_script, RomanStyle, Script};
pub use table::CharacterTable;
pub use tag_guard::TagGuard;
pub use translit::{
    fix_xsl_name, translit_bjt, translit_pali_script, translit_quick, translit_quick_pali_script,
    translit_quick_via, translit_sc, transliterate, transliterate_via, Transliterator,
};
