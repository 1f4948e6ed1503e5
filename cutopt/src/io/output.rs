use serde::{Deserialize, Serialize};
use stockcut::probs::linear::io::ext_repr::{ExtLinearInstance, ExtLinearSolution};
use stockcut::probs::plate::io::ext_repr::{ExtPlateInstance, ExtPlateSolution};

use crate::config::CutConfig;
use crate::pattern::ffca01::RingSolution;

#[derive(Serialize, Deserialize, Clone)]
pub struct LinearOutput {
    #[serde(flatten)]
    pub instance: ExtLinearInstance,
    pub solution: ExtLinearSolution,
    pub config: CutConfig,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct PlateOutput {
    #[serde(flatten)]
    pub instance: ExtPlateInstance,
    pub solution: ExtPlateSolution,
    pub config: CutConfig,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct RingOutput {
    pub solution: RingSolution,
    pub config: CutConfig,
}
