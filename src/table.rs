//! The authored MCNS code/name table.
//!
//! One row per particle species. Positive and negative codes are distinct
//! rows with explicitly stored names; antiparticle names are never derived
//! from the particle row. Both naming conventions for antiparticles appear
//! and are stored verbatim: charge-conjugated names ("anti-Sigma-" for
//! -3222) and plain "anti-" prefixes ("anti-B0", "anti-Lambda_b0").
//!
//! Table contents are versioned data. Consumers depend on specific mappings
//! staying stable across releases: adding rows is backward-compatible,
//! changing an existing row is breaking.

/// A single code/name row of the particle table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticleEntry {
    /// Signed MCNS identifier. Unique across the table.
    pub code: i32,
    /// ASCII display name, e.g. `"e-"`, `"B0"`, `"anti-Lambda_b0"`.
    pub name: &'static str,
}

const fn entry(code: i32, name: &'static str) -> ParticleEntry {
    ParticleEntry { code, name }
}

/// The full authored table, in authoring order.
///
/// Code 0 is a genuine row (the `"-"` placeholder particle), not an absence
/// marker. Reverse lookup returns 0 for unknown names as well, so callers
/// needing to tell the two apart must use [`crate::ParticleRegistry::code`].
pub(crate) static PARTICLE_TABLE: &[ParticleEntry] = &[
    // Placeholder
    entry(0, "-"),
    // Quarks
    entry(1, "d"),
    entry(-1, "anti-d"),
    entry(2, "u"),
    entry(-2, "anti-u"),
    entry(3, "s"),
    entry(-3, "anti-s"),
    entry(4, "c"),
    entry(-4, "anti-c"),
    entry(5, "b"),
    entry(-5, "anti-b"),
    entry(6, "t"),
    entry(-6, "anti-t"),
    entry(7, "b'"),
    entry(-7, "anti-b'"),
    entry(8, "t'"),
    entry(-8, "anti-t'"),
    // Leptons
    entry(11, "e-"),
    entry(-11, "e+"),
    entry(12, "nu_e"),
    entry(-12, "anti-nu_e"),
    entry(13, "mu-"),
    entry(-13, "mu+"),
    entry(14, "nu_mu"),
    entry(-14, "anti-nu_mu"),
    entry(15, "tau-"),
    entry(-15, "tau+"),
    entry(16, "nu_tau"),
    entry(-16, "anti-nu_tau"),
    entry(17, "tau'-"),
    entry(-17, "tau'+"),
    entry(18, "nu'_tau"),
    entry(-18, "anti-nu'_tau"),
    // Gauge and Higgs bosons
    entry(21, "g"),
    entry(22, "gamma"),
    entry(23, "Z0"),
    entry(24, "W+"),
    entry(-24, "W-"),
    entry(25, "Higgs0"),
    entry(32, "Z'0"),
    entry(33, "Z''0"),
    entry(34, "W'+"),
    entry(-34, "W'-"),
    entry(35, "Higgs'0"),
    entry(36, "A0"),
    entry(37, "Higgs+"),
    entry(-37, "Higgs-"),
    // Generator internals and nuclei
    entry(91, "cluster"),
    entry(92, "string"),
    entry(10022, "vpho"),
    entry(1000010020, "deuteron"),
    entry(-1000010020, "anti-deuteron"),
    // Light unflavored mesons
    entry(111, "pi0"),
    entry(211, "pi+"),
    entry(-211, "pi-"),
    entry(221, "eta"),
    entry(331, "eta'"),
    entry(113, "rho0"),
    entry(213, "rho+"),
    entry(-213, "rho-"),
    entry(223, "omega"),
    entry(333, "phi"),
    entry(10111, "a_00"),
    entry(10211, "a_0+"),
    entry(-10211, "a_0-"),
    entry(10221, "f_0"),
    entry(10331, "f'_0"),
    entry(10113, "b_1(1235)0"),
    entry(10213, "b_1(1235)+"),
    entry(-10213, "b_1(1235)-"),
    entry(10223, "h_1"),
    entry(10333, "h'_1"),
    entry(20113, "a_10"),
    entry(20213, "a_1+"),
    entry(-20213, "a_1-"),
    entry(20223, "f_1"),
    entry(20333, "f'_1"),
    entry(115, "a_20"),
    entry(215, "a_2+"),
    entry(-215, "a_2-"),
    entry(225, "f_2"),
    entry(335, "f'_2"),
    entry(117, "rho_30"),
    entry(217, "rho_3+"),
    entry(-217, "rho_3-"),
    entry(227, "omega_3"),
    entry(337, "phi_3"),
    entry(9000221, "sigma_0"),
    entry(9010221, "f_0(980)"),
    entry(100111, "pi(2S)0"),
    entry(100211, "pi(2S)+"),
    entry(-100211, "pi(2S)-"),
    entry(100221, "eta(2S)"),
    entry(100113, "rho(2S)0"),
    entry(100213, "rho(2S)+"),
    entry(-100213, "rho(2S)-"),
    entry(100223, "omega(2S)"),
    entry(100333, "phi(1680)"),
    // Strange mesons
    entry(130, "K_L0"),
    entry(310, "K_S0"),
    entry(311, "K0"),
    entry(-311, "anti-K0"),
    entry(321, "K+"),
    entry(-321, "K-"),
    entry(313, "K*0"),
    entry(-313, "anti-K*0"),
    entry(323, "K*+"),
    entry(-323, "K*-"),
    entry(10311, "K_0*0"),
    entry(-10311, "anti-K_0*0"),
    entry(10321, "K_0*+"),
    entry(-10321, "K_0*-"),
    entry(10313, "K_10"),
    entry(-10313, "anti-K_10"),
    entry(10323, "K_1+"),
    entry(-10323, "K_1-"),
    entry(20313, "K'_10"),
    entry(-20313, "anti-K'_10"),
    entry(20323, "K'_1+"),
    entry(-20323, "K'_1-"),
    entry(315, "K_2*0"),
    entry(-315, "anti-K_2*0"),
    entry(325, "K_2*+"),
    entry(-325, "K_2*-"),
    entry(100313, "K'*0"),
    entry(-100313, "anti-K'*0"),
    entry(100323, "K'*+"),
    entry(-100323, "K'*-"),
    entry(30313, "K''*0"),
    entry(-30313, "anti-K''*0"),
    entry(30323, "K''*+"),
    entry(-30323, "K''*-"),
    entry(317, "K_3*0"),
    entry(-317, "anti-K_3*0"),
    entry(327, "K_3*+"),
    entry(-327, "K_3*-"),
    // Charmed mesons
    entry(411, "D+"),
    entry(-411, "D-"),
    entry(421, "D0"),
    entry(-421, "anti-D0"),
    entry(413, "D*+"),
    entry(-413, "D*-"),
    entry(423, "D*0"),
    entry(-423, "anti-D*0"),
    entry(10411, "D_0*+"),
    entry(-10411, "D_0*-"),
    entry(10421, "D_0*0"),
    entry(-10421, "anti-D_0*0"),
    entry(10413, "D_1+"),
    entry(-10413, "D_1-"),
    entry(10423, "D_10"),
    entry(-10423, "anti-D_10"),
    entry(20413, "D'_1+"),
    entry(-20413, "D'_1-"),
    entry(20423, "D'_10"),
    entry(-20423, "anti-D'_10"),
    entry(415, "D_2*+"),
    entry(-415, "D_2*-"),
    entry(425, "D_2*0"),
    entry(-425, "anti-D_2*0"),
    entry(431, "D_s+"),
    entry(-431, "D_s-"),
    entry(433, "D_s*+"),
    entry(-433, "D_s*-"),
    entry(10431, "D_s0*+"),
    entry(-10431, "D_s0*-"),
    entry(10433, "D_s1+"),
    entry(-10433, "D_s1-"),
    entry(20433, "D'_s1+"),
    entry(-20433, "D'_s1-"),
    entry(435, "D_s2*+"),
    entry(-435, "D_s2*-"),
    entry(100411, "D(2S)+"),
    entry(-100411, "D(2S)-"),
    entry(100421, "D(2S)0"),
    entry(-100421, "anti-D(2S)0"),
    entry(100413, "D*(2S)+"),
    entry(-100413, "D*(2S)-"),
    entry(100423, "D*(2S)0"),
    entry(-100423, "anti-D*(2S)0"),
    // Bottom mesons
    entry(511, "B0"),
    entry(-511, "anti-B0"),
    entry(521, "B+"),
    entry(-521, "B-"),
    entry(513, "B*0"),
    entry(-513, "anti-B*0"),
    entry(523, "B*+"),
    entry(-523, "B*-"),
    entry(10511, "B_0*0"),
    entry(-10511, "anti-B_0*0"),
    entry(10521, "B_0*+"),
    entry(-10521, "B_0*-"),
    entry(10513, "B_10"),
    entry(-10513, "anti-B_10"),
    entry(10523, "B_1+"),
    entry(-10523, "B_1-"),
    entry(20513, "B'_10"),
    entry(-20513, "anti-B'_10"),
    entry(20523, "B'_1+"),
    entry(-20523, "B'_1-"),
    entry(515, "B_2*0"),
    entry(-515, "anti-B_2*0"),
    entry(525, "B_2*+"),
    entry(-525, "B_2*-"),
    entry(531, "B_s0"),
    entry(-531, "anti-B_s0"),
    entry(533, "B_s*0"),
    entry(-533, "anti-B_s*0"),
    entry(10531, "B_s0*0"),
    entry(-10531, "anti-B_s0*0"),
    entry(10533, "B_s10"),
    entry(-10533, "anti-B_s10"),
    entry(20533, "B'_s10"),
    entry(-20533, "anti-B'_s10"),
    entry(535, "B_s2*0"),
    entry(-535, "anti-B_s2*0"),
    entry(541, "B_c+"),
    entry(-541, "B_c-"),
    entry(543, "B_c*+"),
    entry(-543, "B_c*-"),
    entry(10541, "B_c0*+"),
    entry(-10541, "B_c0*-"),
    entry(10543, "B_c1+"),
    entry(-10543, "B_c1-"),
    entry(20543, "B'_c1+"),
    entry(-20543, "B'_c1-"),
    entry(545, "B_c2*+"),
    entry(-545, "B_c2*-"),
    // Charmonium
    entry(441, "eta_c"),
    entry(100441, "eta_c(2S)"),
    entry(443, "J/psi"),
    entry(100443, "psi(2S)"),
    entry(30443, "psi(3770)"),
    entry(9000443, "psi(4040)"),
    entry(9010443, "psi(4160)"),
    entry(9020443, "psi(4415)"),
    entry(10441, "chi_c0"),
    entry(20443, "chi_c1"),
    entry(445, "chi_c2"),
    entry(10443, "h_c"),
    // Bottomonium
    entry(551, "eta_b"),
    entry(100551, "eta_b(2S)"),
    entry(200551, "eta_b(3S)"),
    entry(553, "Upsilon"),
    entry(100553, "Upsilon(2S)"),
    entry(200553, "Upsilon(3S)"),
    entry(300553, "Upsilon(4S)"),
    entry(9000553, "Upsilon(5S)"),
    entry(10551, "chi_b0"),
    entry(20553, "chi_b1"),
    entry(555, "chi_b2"),
    entry(10553, "h_b"),
    entry(110551, "chi_b0(2P)"),
    entry(120553, "chi_b1(2P)"),
    entry(100555, "chi_b2(2P)"),
    entry(210551, "chi_b0(3P)"),
    entry(220553, "chi_b1(3P)"),
    entry(200555, "chi_b2(3P)"),
    entry(30553, "Upsilon_1(1D)"),
    // Light baryons
    entry(2212, "p+"),
    entry(-2212, "anti-p-"),
    entry(2112, "n0"),
    entry(-2112, "anti-n0"),
    entry(2224, "Delta++"),
    entry(-2224, "anti-Delta--"),
    entry(2214, "Delta+"),
    entry(-2214, "anti-Delta-"),
    entry(2114, "Delta0"),
    entry(-2114, "anti-Delta0"),
    entry(1114, "Delta-"),
    entry(-1114, "anti-Delta+"),
    entry(12212, "N(1440)+"),
    entry(-12212, "anti-N(1440)-"),
    entry(12112, "N(1440)0"),
    entry(-12112, "anti-N(1440)0"),
    // Strange baryons
    entry(3122, "Lambda0"),
    entry(-3122, "anti-Lambda0"),
    entry(13122, "Lambda(1405)0"),
    entry(-13122, "anti-Lambda(1405)0"),
    entry(3124, "Lambda(1520)0"),
    entry(-3124, "anti-Lambda(1520)0"),
    entry(3222, "Sigma+"),
    entry(-3222, "anti-Sigma-"),
    entry(3212, "Sigma0"),
    entry(-3212, "anti-Sigma0"),
    entry(3112, "Sigma-"),
    entry(-3112, "anti-Sigma+"),
    entry(3224, "Sigma*+"),
    entry(-3224, "anti-Sigma*-"),
    entry(3214, "Sigma*0"),
    entry(-3214, "anti-Sigma*0"),
    entry(3114, "Sigma*-"),
    entry(-3114, "anti-Sigma*+"),
    entry(3322, "Xi0"),
    entry(-3322, "anti-Xi0"),
    entry(3312, "Xi-"),
    entry(-3312, "anti-Xi+"),
    entry(3324, "Xi*0"),
    entry(-3324, "anti-Xi*0"),
    entry(3314, "Xi*-"),
    entry(-3314, "anti-Xi*+"),
    entry(3334, "Omega-"),
    entry(-3334, "anti-Omega+"),
    // Charmed baryons
    entry(4122, "Lambda_c+"),
    entry(-4122, "anti-Lambda_c-"),
    entry(4222, "Sigma_c++"),
    entry(-4222, "anti-Sigma_c--"),
    entry(4212, "Sigma_c+"),
    entry(-4212, "anti-Sigma_c-"),
    entry(4112, "Sigma_c0"),
    entry(-4112, "anti-Sigma_c0"),
    entry(4224, "Sigma_c*++"),
    entry(-4224, "anti-Sigma_c*--"),
    entry(4214, "Sigma_c*+"),
    entry(-4214, "anti-Sigma_c*-"),
    entry(4114, "Sigma_c*0"),
    entry(-4114, "anti-Sigma_c*0"),
    entry(4232, "Xi_c+"),
    entry(-4232, "anti-Xi_c-"),
    entry(4132, "Xi_c0"),
    entry(-4132, "anti-Xi_c0"),
    entry(4322, "Xi'_c+"),
    entry(-4322, "anti-Xi'_c-"),
    entry(4312, "Xi'_c0"),
    entry(-4312, "anti-Xi'_c0"),
    entry(4324, "Xi_c*+"),
    entry(-4324, "anti-Xi_c*-"),
    entry(4314, "Xi_c*0"),
    entry(-4314, "anti-Xi_c*0"),
    entry(4332, "Omega_c0"),
    entry(-4332, "anti-Omega_c0"),
    entry(4334, "Omega_c*0"),
    entry(-4334, "anti-Omega_c*0"),
    entry(4412, "Xi_cc+"),
    entry(-4412, "anti-Xi_cc-"),
    entry(4422, "Xi_cc++"),
    entry(-4422, "anti-Xi_cc--"),
    // Bottom baryons
    entry(5122, "Lambda_b0"),
    entry(-5122, "anti-Lambda_b0"),
    entry(5112, "Sigma_b-"),
    entry(-5112, "anti-Sigma_b+"),
    entry(5212, "Sigma_b0"),
    entry(-5212, "anti-Sigma_b0"),
    entry(5222, "Sigma_b+"),
    entry(-5222, "anti-Sigma_b-"),
    entry(5114, "Sigma_b*-"),
    entry(-5114, "anti-Sigma_b*+"),
    entry(5214, "Sigma_b*0"),
    entry(-5214, "anti-Sigma_b*0"),
    entry(5224, "Sigma_b*+"),
    entry(-5224, "anti-Sigma_b*-"),
    entry(5132, "Xi_b-"),
    entry(-5132, "anti-Xi_b+"),
    entry(5232, "Xi_b0"),
    entry(-5232, "anti-Xi_b0"),
    entry(5312, "Xi'_b-"),
    entry(-5312, "anti-Xi'_b+"),
    entry(5322, "Xi'_b0"),
    entry(-5322, "anti-Xi'_b0"),
    entry(5314, "Xi_b*-"),
    entry(-5314, "anti-Xi_b*+"),
    entry(5324, "Xi_b*0"),
    entry(-5324, "anti-Xi_b*0"),
    entry(5332, "Omega_b-"),
    entry(-5332, "anti-Omega_b+"),
    entry(5334, "Omega_b*-"),
    entry(-5334, "anti-Omega_b*+"),
    // Diquarks
    entry(1103, "dd_1"),
    entry(-1103, "anti-dd_1"),
    entry(2101, "ud_0"),
    entry(-2101, "anti-ud_0"),
    entry(2103, "ud_1"),
    entry(-2103, "anti-ud_1"),
    entry(2203, "uu_1"),
    entry(-2203, "anti-uu_1"),
    entry(3101, "sd_0"),
    entry(-3101, "anti-sd_0"),
    entry(3103, "sd_1"),
    entry(-3103, "anti-sd_1"),
    entry(3201, "su_0"),
    entry(-3201, "anti-su_0"),
    entry(3203, "su_1"),
    entry(-3203, "anti-su_1"),
    entry(3303, "ss_1"),
    entry(-3303, "anti-ss_1"),
    entry(4101, "cd_0"),
    entry(-4101, "anti-cd_0"),
    entry(4103, "cd_1"),
    entry(-4103, "anti-cd_1"),
    entry(4201, "cu_0"),
    entry(-4201, "anti-cu_0"),
    entry(4203, "cu_1"),
    entry(-4203, "anti-cu_1"),
    entry(4301, "cs_0"),
    entry(-4301, "anti-cs_0"),
    entry(4303, "cs_1"),
    entry(-4303, "anti-cs_1"),
    entry(4403, "cc_1"),
    entry(-4403, "anti-cc_1"),
    entry(5101, "bd_0"),
    entry(-5101, "anti-bd_0"),
    entry(5103, "bd_1"),
    entry(-5103, "anti-bd_1"),
    entry(5201, "bu_0"),
    entry(-5201, "anti-bu_0"),
    entry(5203, "bu_1"),
    entry(-5203, "anti-bu_1"),
    entry(5301, "bs_0"),
    entry(-5301, "anti-bs_0"),
    entry(5303, "bs_1"),
    entry(-5303, "anti-bs_1"),
    entry(5401, "bc_0"),
    entry(-5401, "anti-bc_0"),
    entry(5403, "bc_1"),
    entry(-5403, "anti-bc_1"),
    entry(5503, "bb_1"),
    entry(-5503, "anti-bb_1"),
];
