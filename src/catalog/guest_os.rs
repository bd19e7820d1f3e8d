// src/catalog/guest_os.rs

//! Guest operating system identifiers accepted by `VM Create --custom-guesttype`.
//!
//! A `-64` suffix marks the 64-bit variant.

// Microsoft
pub const DOS: &str = "dos";
pub const WINDOWS_3_1: &str = "win31";
pub const WINDOWS_95: &str = "win95";
pub const WINDOWS_98: &str = "win98";
pub const WINDOWS_ME: &str = "winme";
pub const WINDOWS_NT: &str = "winnt";
pub const WINDOWS_2000_PROFESSIONAL: &str = "win2000pro";
pub const WINDOWS_2000_SERVER: &str = "win2000serv";
pub const WINDOWS_2000_ADVANCED_SERVER: &str = "win2000advserv";
pub const WINDOWS_XP_HOME: &str = "winxphome";
pub const WINDOWS_XP_PROFESSIONAL: &str = "winxppro";
pub const WINDOWS_XP_PROFESSIONAL_64: &str = "winxppro-64";
pub const WINDOWS_SERVER_2003_WEB_EDITION: &str = "winnetweb";
pub const WINDOWS_SERVER_2003_STANDARD_EDITION: &str = "winnetstandard";
pub const WINDOWS_SERVER_2003_ENTERPRISE_EDITION: &str = "winnetenterprise";
pub const WINDOWS_SERVER_2003_DATACENTER_EDITION: &str = "winnetdatacenter";
pub const WINDOWS_SERVER_SMALL_BUSINESS_SERVER_2003: &str = "winnetbusiness";
pub const WINDOWS_SERVER_2003_STANDARD_EDITION_64: &str = "winnetstandard-64";
pub const WINDOWS_SERVER_2003_ENTERPRISE_EDITION_64: &str = "winnetenterprise-64";
pub const WINDOWS_SERVER_2003_DATACENTER_EDITION_64: &str = "winnetdatacenter-64";
pub const WINDOWS_SERVER_2008: &str = "longhorn";
pub const WINDOWS_SERVER_2008_64: &str = "longhorn-64";
pub const WINDOWS_VISTA: &str = "winvista";
pub const WINDOWS_VISTA_64: &str = "winvista-64";
pub const WINDOWS_7: &str = "windows7";
pub const WINDOWS_7_64: &str = "windows7-64";
pub const WINDOWS_SERVER_2008_R2_64: &str = "windows7srv-64";
pub const WINDOWS_8: &str = "windows8";
pub const WINDOWS_8_64: &str = "windows8-64";
pub const WINDOWS_SERVER_2012_SERVER_64: &str = "windows8srv-64";
// vmcli still calls Windows 10 "windows9".
pub const WINDOWS_10: &str = "windows9";
pub const WINDOWS_10_64: &str = "windows9-64";
pub const WINDOWS_HYPER_V: &str = "winhyperv";
pub const WINDOWS_SERVER_2016: &str = "windows9srv-64";
pub const WINDOWS_SERVER_2019: &str = "windows2019srv-64";
pub const WINDOWS_SERVER_2022: &str = "windows2019srvnext-64";
pub const WINDOWS_SERVER_2025: &str = "windows2022srvnext-64";

// BSD
pub const FREEBSD: &str = "freebsd";
pub const FREEBSD_11: &str = "freebsd11";
pub const FREEBSD_12: &str = "freebsd12";
pub const FREEBSD_13: &str = "freebsd13";
pub const FREEBSD_64: &str = "freebsd-64";
pub const FREEBSD_11_64: &str = "freebsd11-64";
pub const FREEBSD_12_64: &str = "freebsd12-64";
pub const FREEBSD_13_64: &str = "freebsd13-64";

// Linux
pub const RED_HAT_LINUX_21: &str = "redhat";
pub const RHEL_2: &str = "rhel2";
pub const RHEL_3: &str = "rhel3";
pub const RHEL_4: &str = "rhel4";
pub const RHEL_5: &str = "rhel5";
pub const RHEL_6: &str = "rhel6";
pub const RHEL_7: &str = "rhel7";
pub const RHEL_3_64: &str = "rhel3-64";
pub const RHEL_4_64: &str = "rhel4-64";
pub const RHEL_5_64: &str = "rhel5-64";
pub const RHEL_6_64: &str = "rhel6-64";
pub const RHEL_7_64: &str = "rhel7-64";
pub const RHEL_8_64: &str = "rhel8-64";
pub const RHEL_9_64: &str = "rhel9-64";
pub const FEDORA: &str = "fedora";
pub const FEDORA_64: &str = "fedora-64";
pub const CENTOS: &str = "centos";
pub const CENTOS_6: &str = "centos6";
pub const CENTOS_7: &str = "centos7";
pub const CENTOS_64: &str = "centos-64";
pub const CENTOS_6_64: &str = "centos6-64";
pub const CENTOS_7_64: &str = "centos7-64";
pub const CENTOS_8_64: &str = "centos8-64";
pub const CENTOS_9_64: &str = "centos9-64";
pub const ORACLE_LINUX: &str = "oraclelinux";
pub const ORACLE_LINUX_6: &str = "oraclelinux6";
pub const ORACLE_LINUX_7: &str = "oraclelinux7";
pub const ORACLE_LINUX_64: &str = "oraclelinux-64";
pub const ORACLE_LINUX_6_64: &str = "oraclelinux6-64";
pub const ORACLE_LINUX_7_64: &str = "oraclelinux7-64";
pub const ORACLE_LINUX_8_64: &str = "oraclelinux8-64";
pub const ORACLE_LINUX_9_64: &str = "oraclelinux9-64";
pub const SUSE_LINUX: &str = "suse";
pub const SUSE_LINUX_64: &str = "suse-64";
pub const OPENSUSE: &str = "opensuse";
pub const OPENSUSE_64: &str = "opensuse-64";
pub const SLES: &str = "sles";
pub const SLES_10: &str = "sles10";
pub const SLES_11: &str = "sles11";
pub const SLES_12: &str = "sles12";
pub const SLES_64: &str = "sles-64";
pub const SLES_10_64: &str = "sles10-64";
pub const SLES_11_64: &str = "sles11-64";
pub const SLES_12_64: &str = "sles12-64";
pub const SLES_15_64: &str = "sles15-64";
pub const SLES_16_64: &str = "sles16-64";
pub const NOVELL_LINUX_DESKTOP_9: &str = "nld9";
pub const SUN_JAVA_DESKTOP_SYSTEM: &str = "sjds";
pub const MANDRAKE_LINUX: &str = "mandrake";
pub const MANDRIVA_LINUX: &str = "mandriva";
pub const MANDRIVA_LINUX_64: &str = "mandriva-64";
pub const TURBO_LINUX: &str = "turbolinux";
pub const TURBO_LINUX_64: &str = "turbolinux-64";
pub const UBUNTU_LINUX: &str = "ubuntu";
pub const UBUNTU_LINUX_64: &str = "ubuntu-64";
pub const DEBIAN_GNU_LINUX_4: &str = "debian4";
pub const DEBIAN_GNU_LINUX_5: &str = "debian5";
pub const DEBIAN_GNU_LINUX_6: &str = "debian6";
pub const DEBIAN_GNU_LINUX_7: &str = "debian7";
pub const DEBIAN_GNU_LINUX_8: &str = "debian8";
pub const DEBIAN_GNU_LINUX_9: &str = "debian9";
pub const DEBIAN_GNU_LINUX_10: &str = "debian10";
pub const DEBIAN_GNU_LINUX_11: &str = "debian11";
pub const DEBIAN_GNU_LINUX_4_64: &str = "debian4-64";
pub const DEBIAN_GNU_LINUX_5_64: &str = "debian5-64";
pub const DEBIAN_GNU_LINUX_6_64: &str = "debian6-64";
pub const DEBIAN_GNU_LINUX_7_64: &str = "debian7-64";
pub const DEBIAN_GNU_LINUX_8_64: &str = "debian8-64";
pub const DEBIAN_GNU_LINUX_9_64: &str = "debian9-64";
pub const DEBIAN_GNU_LINUX_10_64: &str = "debian10-64";
pub const DEBIAN_GNU_LINUX_11_64: &str = "debian11-64";
pub const ASIANUX_3: &str = "asianux3";
pub const ASIANUX_4: &str = "asianux4";
pub const ALMALINUX_64: &str = "almalinux-64";
pub const ASIANUX_3_64: &str = "asianux3-64";
pub const ASIANUX_4_64: &str = "asianux4-64";
pub const ASIANUX_5_64: &str = "asianux5-64";
pub const ASIANUX_6_64: &str = "asianux6-64";
pub const ASIANUX_7_64: &str = "asianux7-64";
pub const ASIANUX_8_64: &str = "asianux8-64";
pub const ASIANUX_9_64: &str = "asianux9-64";
pub const AMAZON_LINUX_2_64: &str = "amazonlinux2-64";
pub const AMAZON_LINUX_3_64: &str = "amazonlinux3-64";
pub const VMWARE_PHOTON_64: &str = "vmware-photon-64";
pub const GENERIC_LINUX: &str = "genericlinux";
pub const OTHER_LINUX: &str = "otherlinux";
pub const OTHER_24X_LINUX: &str = "other24xlinux";
pub const OTHER_26X_LINUX: &str = "other26xlinux";
pub const OTHER_3X_LINUX: &str = "other3xlinux";
pub const OTHER_4X_LINUX: &str = "other4xlinux";
pub const OTHER_5X_LINUX: &str = "other5xlinux";
pub const OTHER_LINUX_64: &str = "otherlinux-64";
pub const OTHER_24X_LINUX_64: &str = "other24xlinux-64";
pub const OTHER_26X_LINUX_64: &str = "other26xlinux-64";
pub const OTHER_3X_LINUX_64: &str = "other3xlinux-64";
pub const OTHER_4X_LINUX_64: &str = "other4xlinux-64";
pub const OTHER_5X_LINUX_64: &str = "other5xlinux-64";

// Solaris
pub const SOLARIS_6: &str = "solaris6";
pub const SOLARIS_7: &str = "solaris7";
pub const SOLARIS_8: &str = "solaris8";
pub const SOLARIS_9: &str = "solaris9";
pub const SOLARIS_10: &str = "solaris10";
pub const SOLARIS_11: &str = "solaris11";
pub const SOLARIS_10_64: &str = "solaris10-64";
pub const SOLARIS_11_64: &str = "solaris11-64";

// Other operating systems
pub const OS_2: &str = "os2";
pub const ECOMSTATION: &str = "ecomstation";
pub const ECOMSTATION_2: &str = "ecomstation2";
pub const NOVELL_NETWARE_4: &str = "netware4";
pub const NOVELL_NETWARE_5: &str = "netware5";
pub const NOVELL_NETWARE_6: &str = "netware6";
pub const SCO_OPEN_SERVER_5: &str = "openserver5";
pub const SCO_OPEN_SERVER_6: &str = "openserver6";
pub const SCO_UNIXWARE_7: &str = "unixware7";

// macOS
pub const MAC_OS_10_5: &str = "darwin";
pub const MAC_OS_10_6: &str = "darwin10";
pub const MAC_OS_11: &str = "darwin11";
pub const MAC_OS_10_5_64: &str = "darwin-64";
pub const MAC_OS_10_6_64: &str = "darwin10-64";
pub const MAC_OS_11_64: &str = "darwin11-64";
pub const MAC_OS_12_64: &str = "darwin12-64";
pub const MAC_OS_13_64: &str = "darwin13-64";
pub const MAC_OS_14_64: &str = "darwin14-64";
pub const MAC_OS_15_64: &str = "darwin15-64";
pub const MAC_OS_16_64: &str = "darwin16-64";
pub const MAC_OS_17_64: &str = "darwin17-64";
pub const MAC_OS_18_64: &str = "darwin18-64";
pub const MAC_OS_19_64: &str = "darwin19-64";
pub const MAC_OS_20_64: &str = "darwin20-64";
pub const MAC_OS_21_64: &str = "darwin21-64";

// ESX
pub const VMWARE_ESX_4: &str = "vmkernel";
pub const VMWARE_ESX_5: &str = "vmkernel5";
pub const VMWARE_ESX_6: &str = "vmkernel6";
pub const VMWARE_ESX_6_5: &str = "vmkernel65";
pub const VMWARE_ESX_7: &str = "vmkernel7";

// Generic
pub const OTHER: &str = "other";
/// Fallback used when no guest type is given.
pub const OTHER_64: &str = "other-64";

/// Every identifier listed in this module.
pub const ALL: &[&str] = &[
    DOS,
    WINDOWS_3_1,
    WINDOWS_95,
    WINDOWS_98,
    WINDOWS_ME,
    WINDOWS_NT,
    WINDOWS_2000_PROFESSIONAL,
    WINDOWS_2000_SERVER,
    WINDOWS_2000_ADVANCED_SERVER,
    WINDOWS_XP_HOME,
    WINDOWS_XP_PROFESSIONAL,
    WINDOWS_XP_PROFESSIONAL_64,
    WINDOWS_SERVER_2003_WEB_EDITION,
    WINDOWS_SERVER_2003_STANDARD_EDITION,
    WINDOWS_SERVER_2003_ENTERPRISE_EDITION,
    WINDOWS_SERVER_2003_DATACENTER_EDITION,
    WINDOWS_SERVER_SMALL_BUSINESS_SERVER_2003,
    WINDOWS_SERVER_2003_STANDARD_EDITION_64,
    WINDOWS_SERVER_2003_ENTERPRISE_EDITION_64,
    WINDOWS_SERVER_2003_DATACENTER_EDITION_64,
    WINDOWS_SERVER_2008,
    WINDOWS_SERVER_2008_64,
    WINDOWS_VISTA,
    WINDOWS_VISTA_64,
    WINDOWS_7,
    WINDOWS_7_64,
    WINDOWS_SERVER_2008_R2_64,
    WINDOWS_8,
    WINDOWS_8_64,
    WINDOWS_SERVER_2012_SERVER_64,
    WINDOWS_10,
    WINDOWS_10_64,
    WINDOWS_HYPER_V,
    WINDOWS_SERVER_2016,
    WINDOWS_SERVER_2019,
    WINDOWS_SERVER_2022,
    WINDOWS_SERVER_2025,
    FREEBSD,
    FREEBSD_11,
    FREEBSD_12,
    FREEBSD_13,
    FREEBSD_64,
    FREEBSD_11_64,
    FREEBSD_12_64,
    FREEBSD_13_64,
    RED_HAT_LINUX_21,
    RHEL_2,
    RHEL_3,
    RHEL_4,
    RHEL_5,
    RHEL_6,
    RHEL_7,
    RHEL_3_64,
    RHEL_4_64,
    RHEL_5_64,
    RHEL_6_64,
    RHEL_7_64,
    RHEL_8_64,
    RHEL_9_64,
    FEDORA,
    FEDORA_64,
    CENTOS,
    CENTOS_6,
    CENTOS_7,
    CENTOS_64,
    CENTOS_6_64,
    CENTOS_7_64,
    CENTOS_8_64,
    CENTOS_9_64,
    ORACLE_LINUX,
    ORACLE_LINUX_6,
    ORACLE_LINUX_7,
    ORACLE_LINUX_64,
    ORACLE_LINUX_6_64,
    ORACLE_LINUX_7_64,
    ORACLE_LINUX_8_64,
    ORACLE_LINUX_9_64,
    SUSE_LINUX,
    SUSE_LINUX_64,
    OPENSUSE,
    OPENSUSE_64,
    SLES,
    SLES_10,
    SLES_11,
    SLES_12,
    SLES_64,
    SLES_10_64,
    SLES_11_64,
    SLES_12_64,
    SLES_15_64,
    SLES_16_64,
    NOVELL_LINUX_DESKTOP_9,
    SUN_JAVA_DESKTOP_SYSTEM,
    MANDRAKE_LINUX,
    MANDRIVA_LINUX,
    MANDRIVA_LINUX_64,
    TURBO_LINUX,
    TURBO_LINUX_64,
    UBUNTU_LINUX,
    UBUNTU_LINUX_64,
    DEBIAN_GNU_LINUX_4,
    DEBIAN_GNU_LINUX_5,
    DEBIAN_GNU_LINUX_6,
    DEBIAN_GNU_LINUX_7,
    DEBIAN_GNU_LINUX_8,
    DEBIAN_GNU_LINUX_9,
    DEBIAN_GNU_LINUX_10,
    DEBIAN_GNU_LINUX_11,
    DEBIAN_GNU_LINUX_4_64,
    DEBIAN_GNU_LINUX_5_64,
    DEBIAN_GNU_LINUX_6_64,
    DEBIAN_GNU_LINUX_7_64,
    DEBIAN_GNU_LINUX_8_64,
    DEBIAN_GNU_LINUX_9_64,
    DEBIAN_GNU_LINUX_10_64,
    DEBIAN_GNU_LINUX_11_64,
    ASIANUX_3,
    ASIANUX_4,
    ALMALINUX_64,
    ASIANUX_3_64,
    ASIANUX_4_64,
    ASIANUX_5_64,
    ASIANUX_6_64,
    ASIANUX_7_64,
    ASIANUX_8_64,
    ASIANUX_9_64,
    AMAZON_LINUX_2_64,
    AMAZON_LINUX_3_64,
    VMWARE_PHOTON_64,
    GENERIC_LINUX,
    OTHER_LINUX,
    OTHER_24X_LINUX,
    OTHER_26X_LINUX,
    OTHER_3X_LINUX,
    OTHER_4X_LINUX,
    OTHER_5X_LINUX,
    OTHER_LINUX_64,
    OTHER_24X_LINUX_64,
    OTHER_26X_LINUX_64,
    OTHER_3X_LINUX_64,
    OTHER_4X_LINUX_64,
    OTHER_5X_LINUX_64,
    SOLARIS_6,
    SOLARIS_7,
    SOLARIS_8,
    SOLARIS_9,
    SOLARIS_10,
    SOLARIS_11,
    SOLARIS_10_64,
    SOLARIS_11_64,
    OS_2,
    ECOMSTATION,
    ECOMSTATION_2,
    NOVELL_NETWARE_4,
    NOVELL_NETWARE_5,
    NOVELL_NETWARE_6,
    SCO_OPEN_SERVER_5,
    SCO_OPEN_SERVER_6,
    SCO_UNIXWARE_7,
    MAC_OS_10_5,
    MAC_OS_10_6,
    MAC_OS_11,
    MAC_OS_10_5_64,
    MAC_OS_10_6_64,
    MAC_OS_11_64,
    MAC_OS_12_64,
    MAC_OS_13_64,
    MAC_OS_14_64,
    MAC_OS_15_64,
    MAC_OS_16_64,
    MAC_OS_17_64,
    MAC_OS_18_64,
    MAC_OS_19_64,
    MAC_OS_20_64,
    MAC_OS_21_64,
    VMWARE_ESX_4,
    VMWARE_ESX_5,
    VMWARE_ESX_6,
    VMWARE_ESX_6_5,
    VMWARE_ESX_7,
    OTHER,
    OTHER_64,
];

pub fn is_known(id: &str) -> bool {
    ALL.contains(&id)
}
