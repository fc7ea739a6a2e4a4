//! Shared test utilities for integration tests.
//!
//! Import from integration test files as:
//! ```ignore
//! mod common;
//! ```

/// Initialize tracing for tests, respecting RUST_LOG env var.
///
/// Safe to call multiple times; subsequent calls are no-ops.
#[allow(dead_code)]
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// A document dump the way the repository server emits one: banner lines
/// the parser treats as noise, typed system attributes, and repeating
/// values split across continuation lines arriving out of index order.
#[allow(dead_code)]
pub fn document_dump() -> &'static str {
    "\
---
USER ATTRIBUTES
---
object_name : TPS Report Q3
title :
subject : quarterly totals
keywords[0] : finance
keywords[2] : quarterly
[1] : tps
owner_name : jdoe
acl_name : dm_45000001800001d0
a_content_type : msw12
a_storage_type : filestore_01
---
SYSTEM ATTRIBUTES
---
r_object_id [ID] : 0900000180000100
r_creation_date [time] : 1/12/2026 09:30:00
r_modify_date [time] : 2/3/2026 17:05:00
r_version_label[1] : 1.0
[0] : CURRENT
i_vstamp [integer] : 4
i_chronicle_id [ID] : 0900000180000100
"
}

#[allow(dead_code)]
pub fn user_dump() -> &'static str {
    "\
user_name : Jane Doe
user_login_name : jdoe
user_address : jdoe@example.com
user_os_name : jdoe
user_privileges [integer] : 16
user_xprivileges [integer] : 56
user_state [integer] : 0
client_capability [integer] : 2
default_folder : /Home/jdoe
user_initials : JD
workflow_disabled [boolean] : F
description : Finance analyst
r_modify_date [time] : 2/3/2026 17:05:00
r_is_group [boolean] : F
i_is_replica [boolean] : F
"
}

#[allow(dead_code)]
pub fn group_dump() -> &'static str {
    "\
group_name : finance_team
group_class : group
description : Finance department
owner_name : jdoe
group_admin : admingroup
is_private [boolean] : F
alias_set_id [ID] : 0000000000000000
users_names[0] : jdoe
[1] : asmith
[2] : badams
groups_names[0] : finance_leads
r_modify_date [time] : 2/3/2026 17:05:00
i_all_users_names[0] : jdoe
"
}
