//!Strategy selection from configuration.
//!
//!```toml
//!method = "khop_degree"
//!khop_decay = 0.3
//!khop_max_hops = 4
//!```

use std::path::Path;
use serde::{Deserialize,Serialize};

use crate::error::{OrderingError,Result};
use crate::ordering::{OrderingMethod,KHopDegree};

///Strategy names as they appear in configuration.
#[derive(Clone,Copy,Debug,PartialEq,Eq,Serialize,Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind{
    ExactMinimumDegree,
    GreedyMinimumFillin,
    ApproximateFillin,
    GreedyRow,
    KhopDegree
}

impl Default for MethodKind{
    fn default() -> Self{ MethodKind::ExactMinimumDegree }
}

///Configuration for choosing an ordering strategy.
#[derive(Clone,Debug,PartialEq,Serialize,Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderingConfig{
    ///Which strategy to run.
    #[serde(default)]
    pub method : MethodKind,

    ///Per-hop weight of the k-hop strategy, strictly between 0 and 1.
    #[serde(default = "default_khop_decay")]
    pub khop_decay : f64,

    ///Depth limit of the k-hop expansion. Unlimited when absent.
    #[serde(default)]
    pub khop_max_hops : Option<usize>
}

fn default_khop_decay() -> f64{
    0.5
}

impl Default for OrderingConfig{
    fn default() -> Self{
        OrderingConfig { method : MethodKind::default(), khop_decay : default_khop_decay(), khop_max_hops : None }
    }
}

impl OrderingConfig{
    pub fn from_toml_str(text : &str) -> Result<Self>{
        toml::from_str(text).map_err(|e| OrderingError::Config(e.to_string()))
    }

    pub fn load<P : AsRef<Path>>(path : P) -> Result<Self>{
        let text = std::fs::read_to_string(path)?;
        OrderingConfig::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String>{
        toml::to_string(self).map_err(|e| OrderingError::Config(e.to_string()))
    }

    ///Validated strategy described by this config.
    pub fn build(&self) -> Result<OrderingMethod>{
        let method = match self.method{
            MethodKind::ExactMinimumDegree => OrderingMethod::ExactMinimumDegree,
            MethodKind::GreedyMinimumFillin => OrderingMethod::GreedyMinimumFillin,
            MethodKind::ApproximateFillin => OrderingMethod::ApproximateFillin,
            MethodKind::GreedyRow => OrderingMethod::GreedyRow,
            MethodKind::KhopDegree => {
                let k = KHopDegree::new(self.khop_decay)?;
                match self.khop_max_hops{
                    Some(0) => return Err(OrderingError::invalid_argument("khop_max_hops","must be at least 1")),
                    Some(h) => OrderingMethod::KHopDegree(k.with_max_hops(h)),
                    None => OrderingMethod::KHopDegree(k)
                }
            }
        };
        if method.is_experimental(){
            log::warn!("configured ordering {} is experimental",method.name());
        }
        Ok(method)
    }
}
