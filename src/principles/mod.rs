pub mod dip;
pub mod isp;
pub mod lsp;
pub mod ocp;
pub mod srp;

use crate::config::ShowcaseConfig;
use crate::domain::ports::Demo;
use crate::utils::error::Result;

/// All five demos, in principle order, built from the configured samples.
pub fn catalog(config: &ShowcaseConfig) -> Result<Vec<Box<dyn Demo>>> {
    let demos: Vec<Box<dyn Demo>> = vec![
        Box::new(srp::SrpDemo::new(config.srp.requests.clone())?),
        Box::new(ocp::OcpDemo::new(
            config.ocp.cities.clone(),
            config.ocp.directory.clone(),
        )),
        Box::new(lsp::LspDemo::new(
            config.lsp.employee.clone(),
            config.lsp.permanent.clone(),
        )),
        Box::new(isp::IspDemo::new(
            config.isp.values.clone(),
            config.isp.invoice_label.clone(),
        )),
        Box::new(dip::DipDemo::new(config.dip.wheel_count, config.dip.engine.clone())),
    ];
    Ok(demos)
}
