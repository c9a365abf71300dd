use crate::{BackendKind, DeviceSpec};

#[test]
fn test_device_spec_parse() {
    assert_eq!(DeviceSpec::parse("CPU").unwrap(), DeviceSpec::Cpu);
    assert_eq!(DeviceSpec::parse("cpu").unwrap(), DeviceSpec::Cpu);

    assert_eq!(
        DeviceSpec::parse("OPENCL:1:2").unwrap(),
        DeviceSpec::OpenCl { platform_id: 1, device_id: 2 }
    );
    assert_eq!(
        DeviceSpec::parse("opencl").unwrap(),
        DeviceSpec::OpenCl { platform_id: 0, device_id: 0 }
    );
    assert_eq!(DeviceSpec::parse("cuda:3").unwrap(), DeviceSpec::Cuda { device_id: 3 });
    assert_eq!(DeviceSpec::parse("CUDA").unwrap(), DeviceSpec::Cuda { device_id: 0 });
}

#[test]
fn test_device_spec_parse_rejects_unknown() {
    assert!(DeviceSpec::parse("METAL").is_err());
    assert!(DeviceSpec::parse("").is_err());
    assert!(DeviceSpec::parse("CUDA:notanumber").is_err());
}

#[test]
fn test_device_spec_canonicalize() {
    assert_eq!(DeviceSpec::Cpu.canonicalize(), "CPU");
    assert_eq!(
        DeviceSpec::OpenCl { platform_id: 0, device_id: 1 }.canonicalize(),
        "OPENCL:0:1"
    );
    assert_eq!(DeviceSpec::Cuda { device_id: 1 }.canonicalize(), "CUDA:1");
}

#[test]
fn test_canonicalize_parse_round_trip() {
    for spec in [
        DeviceSpec::Cpu,
        DeviceSpec::OpenCl { platform_id: 2, device_id: 0 },
        DeviceSpec::Cuda { device_id: 7 },
    ] {
        assert_eq!(DeviceSpec::parse(&spec.canonicalize()).unwrap(), spec);
    }
}

#[test]
fn test_backend_mapping() {
    assert_eq!(DeviceSpec::Cpu.backend(), BackendKind::Cpu);
    assert_eq!(
        DeviceSpec::OpenCl { platform_id: 0, device_id: 0 }.backend(),
        BackendKind::OpenCl
    );
    assert_eq!(DeviceSpec::Cuda { device_id: 0 }.backend(), BackendKind::Cuda);
}
