//! Test fixtures and constants.

/// A valid 12-digit account id.
pub const ACCOUNT_A: &str = "111111111111";

/// A second valid account id.
pub const ACCOUNT_B: &str = "222222222222";

/// A malformed account id for negative tests.
pub const INVALID_ACCOUNT: &str = "1234-5678";

/// CSV with synonym headers, a quoted name, a dashed account id, and one
/// unusable row.
pub const SAMPLE_CSV: &str = "\
Name,AWS Account ID,Auth Type,Region,Tags
\"Prod, EU\",1111-1111-1111,iam,eu-west-1,prod;billing
Staging,222222222222,sso,us-east-2,
Broken,12345,iam,us-east-1,
";

/// Provider CLI config with an SSO profile, a role profile, and a section
/// without any account id.
pub const SAMPLE_PROVIDER_CONFIG: &str = "\
[sso-session corp]
sso_start_url = https://corp.awsapps.com/start
sso_region = us-east-1

[profile dev]
sso_session = corp
sso_account_id = 111111111111
sso_role_name = Developer
region = us-west-2

[profile ops]
role_arn = arn:aws:iam::333333333333:role/Ops
source_profile = dev

[default]
region = us-east-1
";
