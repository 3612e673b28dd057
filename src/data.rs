/*! Valeurs forfaitaires par défaut

Tables Rd et Rg de la méthode 3CL-DPE utilisées quand l'utilisateur ne fournit pas ses
propres tables. La table Fecs n'est pas incluse et doit être fournie par l'appelant.
*/

use crate::error::EcsError;
use crate::tables::{FecsData, RdData, RgData};

/// Rendements de distribution forfaitaires
pub const DEFAULT_RD: &str = "
#META DPE_SOURCE: 3CL-DPE 2021
#META DPE_TABLE: RD
collective, looping, contiguous, in_heated_volume, rd
false, *, true, true, 0.930 # Installation individuelle, production en volume habitable, pièces alimentées contiguës
false, *, false, true, 0.890 # Installation individuelle, production en volume habitable, pièces alimentées non contiguës
false, *, *, false, 0.850 # Installation individuelle, production hors volume habitable
false, *, *, *, 0.850 # Installation individuelle, configuration non renseignée
true, UNLOOPED, *, *, 0.850 # Installation collective sans boucle
true, LOOPED, *, *, 0.750 # Installation collective bouclée
true, HEAT_TRACED, *, *, 0.780 # Installation collective avec traçage
true, *, *, *, 0.750 # Installation collective, bouclage non renseigné
";

/// Rendements de génération par effet Joule forfaitaires
pub const DEFAULT_RG: &str = "
#META DPE_SOURCE: 3CL-DPE 2021
#META DPE_TABLE: RG
generator, energy, rg
INSTANTANEOUS, ELECTRICITY, 1.000 # Chauffe-eau électrique instantané
VERTICAL_TANK, ELECTRICITY, 1.000 # Ballon électrique vertical
HORIZONTAL_TANK, ELECTRICITY, 1.000 # Ballon électrique horizontal
BOILER, ELECTRICITY, 0.770 # Chaudière électrique
";

/// Default distribution yield table
pub fn default_rd() -> Result<RdData, EcsError> {
    DEFAULT_RD.parse()
}

/// Default resistive generation yield table
pub fn default_rg() -> Result<RgData, EcsError> {
    DEFAULT_RG.parse()
}

/// Empty solar fraction table
///
/// Any lookup fails, so it is only usable for systems without solar contribution or
/// with a user supplied solar fraction.
pub fn empty_fecs() -> FecsData {
    FecsData::default()
}
