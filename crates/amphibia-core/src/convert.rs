// ── Wire → domain conversion ──

use amphibia_api::AmphibianRecord;

use crate::model::Amphibian;

impl From<AmphibianRecord> for Amphibian {
    fn from(r: AmphibianRecord) -> Self {
        Self {
            name: r.name,
            kind: r.kind,
            description: r.description,
            image_url: r.img_src,
        }
    }
}
