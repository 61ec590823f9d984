// 4096-bit safe prime group
pub(crate) const PRODUCTION_4096_P: &str = concat!(
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
    "93C467E37DB0C7A4D1BE3F810152CB56A1CECC3AF65CC0190C03DF34709AFFBD",
    "8E4B59FA03A9F0EED0649CCB621057D11056AE9132135A08E43B4673D74BAFEA",
    "58DEB878CC86D733DBE7BF38154B36CF8A96D1567899AAAE0C09D4C8B6B7B86F",
    "D2A1EA1DE62FF8643EC7C271827977225E6AC2F0BD61C746961542A3CE3BEA5D",
    "B54FE70E63E6D09F8FC28658E80567A47CFDE60EE741E5D85A7BD46931CED822",
    "0365594964B839896FCAABCCC9B31959C083F22AD3EE591C32FAB2C7448F2A05",
    "7DB2DB49EE52E0182741E53865F004CC8E704B7C5C40BF304C4D8C4F13EDF604",
    "7C555302D2238D8CE11DF2424F1B66C2C5D238D0744DB679AF2890487031F9C0",
    "AEA1C4BB6FE9554EE528FDF1B05E5B256223B2F09215F3719F9C7CCC69DDF172",
    "D0D6234217FCC0037F18B93EF5389130B7A661E5C26E54214068BBCAFEA32A67",
    "818BD3075AD1F5C7E9CC3D1737FB28171BAF84DBB6612B7881C1A48E439CD03A",
    "92BF52225A2B38E6542E9F722BCE15A381B5753EA842763381CCAE83512B3051",
    "1B32E5E8D80362149AD030AABA5F3A5798BB22AA7EC1B6D0F17903F4E22D8407",
    "34AA85973F79A93FFB82A75C47C03D43D2F9CA02D03199BACEDDD4533A52566A",
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
);

pub(crate) const PRODUCTION_4096_Q: &str = concat!(
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF43",
);

pub(crate) const PRODUCTION_4096_G: &str = concat!(
    "1D41E49C477E15EAEEF0C5E4AC08D4A46C268CD3424FC01D13769BDB43673218",
    "587BC86C4C1448D006A03699F3ABAE5FEB19E296F5D143CC5E4A3FC89088C9F4",
    "523D166EE3AE9D5FB03C0BDD77ADD5C017F6C55E2EC92C226FEF5C6C1DF2E7C3",
    "6D90E7EAADE098241D3409983BCCD2B5379E9391FBC62F9F8D939D1208B16036",
    "7C134264122189595EC85C8CDBE5F9D307F46912C04932F8C16815A76B4682BD",
    "6BDC0ED52B00D8D30F59C731D5A7FFAE8165D53CF96649AAC2B743DA56F14F19",
    "DACC5236F29B1AB9F9BEFC69697293D5DEAD8B5BF5DE9BAB6DE67C45719E5634",
    "4A3CBDF3609824B1B578E34EAEB6DD3190AB3571D6D671C512282C1DA7BD36B4",
    "251D2584FADEA80B9E141423074DD9B5FB83ACBDEAD4C87A58FFF517F977A830",
    "80370A3B0CF98A1BC2978C47AAC29611FD6C40E2F9875C35D50443A9AA3F4961",
    "1DCD3A0D6FF3CB3FACF31471BDB61860B92C594D4E46569BB39FEEADFF1FD64C",
    "836A6D6DB85C6BA7241766B7AB56BF739633B054147F7170921412E948D9E474",
    "02D15BB1C257318612C121C36B80EB8433C08E7D0B7149E3AB0A8735A92EDCE8",
    "FF943E28A2DCEACFCC69EC318909CB047BE1C5858844B5AD44F22EEB289E4CC5",
    "54F7A5E2F3DEA026877FF92851816071CE028EB868D965CCB2D2295A8C55BD1C",
    "070B39B09AE06B37D29343B9D8997DC244C468B980970731736EE018BBADB987",
);

pub(crate) const PRODUCTION_4096_R: &str = concat!(
    "100000000000000000000000000000000000000000000000000000000000000B",
    "C93C467E37DB0C7A4D1BE3F810152CB56A1CECC3AF65CC0190C03DF34709B8AF",
    "6A64C0CEDCF2D559DA9D97F095C3076C686037619148D2C86C317102AFA21480",
    "31F04440AC0FF0C9A417A89212512E7607B2501DAA4D38A2C1410C4836149E2B",
    "DB8C8260E627C4646963EFFE9E16E495D48BD215C6D8EC9D1667657A2A1C8506",
    "F2113FFAD19A6B2BC7C45760456719183309F874BC9ACE570FFDA877AA2B23A2",
    "D6F291C1554CA2EB12F12CD009B8B8734A64AD51EB893BD891750B85162241D9",
    "08F0C9709879758E7E8233EAB3BF2D6AB53AFA32AA153AD6682E5A0648897C9B",
    "E18A0D50BECE030C3432336AD9163E33F8E7DAF498F14BB2852AFFA814841EB1",
    "8DD5F0E89516D557776285C16071D211194EE1C3F34642036AB886E3EC28882C",
    "E4003DEA335B4D935BAE4B58235B9FB2BAB713C8F705A1C7DE42220209D6BBCA",
    "CC467318601565272E4A63E38E2499754AE493AC1A8E83469EEF35CA27C271BC",
    "792EEE21156E617B922EA8F713C22CF282DC5D6385BB12868EB781278FA0AB2A",
    "8958FCCB5FFE2E5C361FC174420122B0163CA4A46308C8C46C91EA7457C136A7",
    "D9FD4A7F529FD4A7F529FD4A7F529FD4A7F529FD4A7F529FD4A7F529FD4A7F52",
    "A",
);

// 3072-bit safe prime group
pub(crate) const PRODUCTION_3072_P: &str = concat!(
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
    "93C467E37DB0C7A4D1BE3F810152CB56A1CECC3AF65CC0190C03DF34709AFFBD",
    "8E4B59FA03A9F0EED0649CCB621057D11056AE9132135A08E43B4673D74BAFEA",
    "58DEB878CC86D733DBE7BF38154B36CF8A96D1567899AAAE0C09D4C8B6B7B86F",
    "D2A1EA1DE62FF8643EC7C271827977225E6AC2F0BD61C746961542A3CE3BEA5D",
    "B54FE70E63E6D09F8FC28658E80567A47CFDE60EE741E5D85A7BD46931CED822",
    "0365594964B839896FCAABCCC9B31959C083F22AD3EE591C32FAB2C7448F2A05",
    "7DB2DB49EE52E0182741E53865F004CC8E704B7C5C40BF304C4D8C4F13EDF604",
    "7C555302D2238D8CE11DF2424F1B66C2C5D238D0744DB679AF2890487031F9C0",
    "AEA1C4BB6FE9554EE528FDF1B05E5B256223B2F09215F3719F9C7CCC69DED4E5",
    "30A6EC940C45314D16D3D864B4A8934F8B87C52AFA0961A0A6C5EE4A35377773",
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
);

pub(crate) const PRODUCTION_3072_Q: &str = concat!(
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF43",
);

pub(crate) const PRODUCTION_3072_G: &str = concat!(
    "AF8DC2057963C6C364119C014A27686BA780576748B72F670C4A5D4C3FAC1E22",
    "8B84FBA88C4EAF94DF98755C6C73611BB54A14A6E232D238C917DA76D8A62B70",
    "837A15EEC1110C112561AB0EAE9E11DDCEC61F2BBD54BB762FC903494EF21F0F",
    "338FE26582453CE3FF02C53A77296126E59E1980CD49A56726A40CFDEF93A181",
    "41CF83442D0FDCDF9F1351B2D0CF814CE9C796402DC2218132D283605BDD1546",
    "8EABA4B6F78E4DE3DE0766FA9915ED28E00D90757F494986092477C90C5FC305",
    "A56829088D996D227D2F018C1A16377B0014A8183F59CF8871C4659132BDDBA7",
    "9E869AE8F65C93608D179A07D7D994E058E5F51B47C7209A25864DA9F1377C16",
    "B1C09C85B66CC3D527FAB3F6B2DF6D6BEA15206298BAC3E293F10E2E9B780ECE",
    "033A47CFC451221522BB709E1B94D8EA7487242185D8F8FB013E9E107395D53E",
    "22C55502FC1E4A915766F3C3B463A3EE4CB682926A0C4F87CD86181ABC6FB902",
    "BD8331DE18F59820C5D967D784B1C06E5A94F31EF8611B545D2F1E184CEAC312",
);

pub(crate) const PRODUCTION_3072_R: &str = concat!(
    "100000000000000000000000000000000000000000000000000000000000000B",
    "C93C467E37DB0C7A4D1BE3F810152CB56A1CECC3AF65CC0190C03DF34709B8AF",
    "6A64C0CEDCF2D559DA9D97F095C3076C686037619148D2C86C317102AFA21480",
    "31F04440AC0FF0C9A417A89212512E7607B2501DAA4D38A2C1410C4836149E2B",
    "DB8C8260E627C4646963EFFE9E16E495D48BD215C6D8EC9D1667657A2A1C8506",
    "F2113FFAD19A6B2BC7C45760456719183309F874BC9ACE570FFDA877AA2B23A2",
    "D6F291C1554CA2EB12F12CD009B8B8734A64AD51EB893BD891750B85162241D9",
    "08F0C9709879758E7E8233EAB3BF2D6AB53AFA32AA153AD6682E5A0648897C9B",
    "E18A0D50BECE030C3432336AD9163E33F8E7DAF498F14BB2852AFFA814841EB1",
    "8DD5F0E89516D557776285C16071D211194EE1C3F34642036AB886E3EC289664",
    "09FD4A7F529FD4A7F529FD4A7F529FD4A7F529FD4A7F529FD4A7F529FD4A7F52",
    "A",
);

// Small group for fast tests. P = Q * R + 1.
pub(crate) const TINY_P: u64 = 1_879_047_647;
pub(crate) const TINY_Q: u64 = 134_217_689;
pub(crate) const TINY_R: u64 = 14;
pub(crate) const TINY_G: u64 = 16_384;
