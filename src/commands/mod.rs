//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `install` - Full flow: stage + post-install
//! - `stage` - Stage the distribution into the prefix (install hook)
//! - `post_install` - Bootstrap home, launcher, link, audit (post-install hook)
//! - `audit` - PATH audit only
//! - `doctor` - Installation health report
//! - `show` - Display resolved configuration

mod audit;
mod doctor;
mod install;
mod post_install;
mod show;
mod stage;

pub use audit::cmd_audit;
pub use doctor::cmd_doctor;
pub use install::cmd_install;
pub use post_install::cmd_post_install;
pub use show::cmd_show;
pub use stage::cmd_stage;
