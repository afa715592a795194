/// A network interface attached to an instance. An interface belongs to
/// exactly one subnet.
#[derive(Debug, Clone)]
pub struct NetworkInterface {
    pub network_interface_id: String,
    pub subnet_id: String,
}

impl NetworkInterface {
    pub fn new(network_interface_id: impl Into<String>, subnet_id: impl Into<String>) -> Self {
        Self {
            network_interface_id: network_interface_id.into(),
            subnet_id: subnet_id.into(),
        }
    }
}

/// A running instance and its attached interfaces.
#[derive(Debug, Clone)]
pub struct Instance {
    pub instance_id: String,
    pub network_interfaces: Vec<NetworkInterface>,
}

impl Instance {
    pub fn new(instance_id: impl Into<String>, network_interfaces: Vec<NetworkInterface>) -> Self {
        Self {
            instance_id: instance_id.into(),
            network_interfaces,
        }
    }

    /// Interfaces of this instance that live in the given subnet.
    pub fn interfaces_in_subnet<'a>(
        &'a self,
        subnet_id: &'a str,
    ) -> impl Iterator<Item = &'a NetworkInterface> {
        self.network_interfaces
            .iter()
            .filter(move |eni| eni.subnet_id == subnet_id)
    }
}
