mod etcd;

pub use etcd::{EtcdSpecSource, SERVICE_SPEC_PREFIX};
