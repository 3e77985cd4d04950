//! Built-in license catalog
//!
//! Declaration order here is the listing order. Lookup keys and aliases
//! are indexed by the parent module; later entries win on collision, so
//! `LGPL-2.1-only` (declared after `LGPL-2.1-or-later`) owns the
//! ambiguous `lgpl21`-style shorthands.

use super::spec::{
    FieldDefault, FieldSpec, LicenseSpec, PostProcess, Replacement, ReplacementValue, NOTICE_KEY,
};

const YEAR: FieldSpec = FieldSpec {
    key: "year",
    prompt: "Copyright year",
    default: Some(FieldDefault::CurrentYear),
    optional: false,
    placeholder: Some("<year>"),
};

const COPYRIGHT_HOLDER: FieldSpec = FieldSpec {
    key: "copyright_holder",
    prompt: "Copyright holder",
    default: Some(FieldDefault::AuthorName),
    optional: false,
    placeholder: Some("<copyright holder>"),
};

/// CC0 and the Unlicense address an "author or holder"
const AUTHOR_OR_HOLDER: FieldSpec = FieldSpec {
    prompt: "Author or holder",
    ..COPYRIGHT_HOLDER
};

const AUTHOR: FieldSpec = FieldSpec {
    prompt: "Author",
    ..COPYRIGHT_HOLDER
};

/// BSD variants call the holder field `owner`
const OWNER: FieldSpec = FieldSpec {
    key: "owner",
    prompt: "Copyright holder",
    default: Some(FieldDefault::AuthorName),
    optional: false,
    placeholder: Some("<owner>"),
};

const EMAIL: FieldSpec = FieldSpec {
    key: "email",
    prompt: "Contact email (optional)",
    default: Some(FieldDefault::AuthorEmail),
    optional: true,
    placeholder: Some("<email>"),
};

const PROJECT_NAME: FieldSpec = FieldSpec {
    key: "project_name",
    prompt: "Project name",
    default: Some(FieldDefault::WorkingDirName),
    optional: false,
    placeholder: Some("<project name>"),
};

const PROGRAM_NAME: FieldSpec = FieldSpec {
    key: "program_name",
    prompt: "Program name",
    default: Some(FieldDefault::WorkingDirName),
    optional: false,
    placeholder: Some("<program name>"),
};

const LIBRARY_OR_PROGRAM_NAME: FieldSpec = FieldSpec {
    prompt: "Library or program name",
    ..PROGRAM_NAME
};

const PROGRAM_OR_LIBRARY_NAME: FieldSpec = FieldSpec {
    prompt: "Program or library name",
    ..PROGRAM_NAME
};

const PROGRAM_DESCRIPTION: FieldSpec = FieldSpec {
    key: "program_description",
    prompt: "Program description",
    default: None,
    optional: true,
    placeholder: Some("<description>"),
};

const PROGRAM_URL: FieldSpec = FieldSpec {
    key: "program_url",
    prompt: "Project URL (optional)",
    default: None,
    optional: true,
    placeholder: Some("<url>"),
};

/// Sample notice line in the GPLv3/AGPLv3 appendix
const GPL3_TAGLINE_TOKEN: &str =
    "<one line to give the program's name and a brief idea of what it does.>";

/// Combined notice line in the GPLv2 appendix (note the 5-space indent)
const GPL2_NOTICE_TOKEN: &str =
    "     one line to give the program's name and an idea of what it does. Copyright (C) yyyy name of author";

/// Two-line notice block in the LGPLv2.1 appendix
const LGPL21_NOTICE_TOKEN: &str =
    "     one line to give the library's name and an idea of what it does.\n     Copyright (C) year  name of author";

const PROJECT_PREAMBLE: &str = "{project_name}\nCopyright (c) {year} {copyright_holder}";

const COPYRIGHT_PREAMBLE: &str = "Copyright (c) {year} {copyright_holder}";

const GPL_FIELDS: &[FieldSpec] = &[
    YEAR,
    COPYRIGHT_HOLDER,
    EMAIL,
    PROGRAM_NAME,
    PROGRAM_DESCRIPTION,
    PROGRAM_URL,
];

const LGPL21_FIELDS: &[FieldSpec] = &[
    YEAR,
    COPYRIGHT_HOLDER,
    EMAIL,
    LIBRARY_OR_PROGRAM_NAME,
    PROGRAM_DESCRIPTION,
    PROGRAM_URL,
];

const LGPL3_FIELDS: &[FieldSpec] = &[
    YEAR,
    COPYRIGHT_HOLDER,
    EMAIL,
    PROGRAM_OR_LIBRARY_NAME,
    PROGRAM_DESCRIPTION,
    PROGRAM_URL,
];

const GPL3_REPLACEMENTS: &[Replacement] = &[
    Replacement {
        tokens: &["<year>"],
        value: ReplacementValue::Key("year"),
    },
    Replacement {
        tokens: &["<name of author>"],
        value: ReplacementValue::HolderWithEmail {
            holder_key: "copyright_holder",
        },
    },
    Replacement {
        tokens: &["<program>"],
        value: ReplacementValue::Key("program_name"),
    },
    Replacement {
        tokens: &[GPL3_TAGLINE_TOKEN],
        value: ReplacementValue::ProgramTagline,
    },
];

/// The AGPL appendix has no interactive-mode `<program>` sample
const AGPL3_REPLACEMENTS: &[Replacement] = &[
    Replacement {
        tokens: &["<year>"],
        value: ReplacementValue::Key("year"),
    },
    Replacement {
        tokens: &["<name of author>"],
        value: ReplacementValue::HolderWithEmail {
            holder_key: "copyright_holder",
        },
    },
    Replacement {
        tokens: &[GPL3_TAGLINE_TOKEN],
        value: ReplacementValue::ProgramTagline,
    },
];

const GPL2_REPLACEMENTS: &[Replacement] = &[Replacement {
    tokens: &[GPL2_NOTICE_TOKEN],
    value: ReplacementValue::Key(NOTICE_KEY),
}];

const LGPL21_REPLACEMENTS: &[Replacement] = &[Replacement {
    tokens: &[LGPL21_NOTICE_TOKEN],
    value: ReplacementValue::Key(NOTICE_KEY),
}];

const BSD_REPLACEMENTS: &[Replacement] = &[
    Replacement {
        tokens: &["<year>"],
        value: ReplacementValue::Key("year"),
    },
    Replacement {
        tokens: &["<owner>"],
        value: ReplacementValue::HolderWithEmail { holder_key: "owner" },
    },
];

pub(super) static CATALOG: &[LicenseSpec] = &[
    LicenseSpec {
        key: "MIT",
        name: "MIT License",
        filename: "MIT.txt",
        aliases: &["mit", "mitlicense"],
        fields: &[YEAR, COPYRIGHT_HOLDER, EMAIL],
        replacements: &[
            Replacement {
                tokens: &["<year>"],
                value: ReplacementValue::Key("year"),
            },
            Replacement {
                tokens: &["<copyright holders>"],
                value: ReplacementValue::HolderWithEmail {
                    holder_key: "copyright_holder",
                },
            },
        ],
        preamble: None,
        post_process: None,
    },
    LicenseSpec {
        key: "AGPL-3.0-only",
        name: "GNU AGPL v3 (only)",
        filename: "AGPL-3.0-only.txt",
        aliases: &["agpl-3.0-only", "agpl3-only"],
        fields: GPL_FIELDS,
        replacements: AGPL3_REPLACEMENTS,
        preamble: None,
        post_process: None,
    },
    LicenseSpec {
        key: "LGPL-2.1-or-later",
        name: "GNU LGPL v2.1 (or later)",
        filename: "LGPL-2.1-or-later.txt",
        aliases: &["lgpl-2.1", "lgpl2.1", "lgpl-2.1+", "lgpl21-or-later"],
        fields: LGPL21_FIELDS,
        replacements: LGPL21_REPLACEMENTS,
        preamble: None,
        post_process: Some(PostProcess::LibraryNoticeBlock),
    },
    LicenseSpec {
        key: "LGPL-2.1-only",
        name: "GNU LGPL v2.1 (only)",
        filename: "LGPL-2.1-only.txt",
        aliases: &["lgpl-2.1-only", "lgpl21"],
        fields: LGPL21_FIELDS,
        replacements: LGPL21_REPLACEMENTS,
        preamble: None,
        post_process: Some(PostProcess::LibraryNoticeBlock),
    },
    LicenseSpec {
        key: "GPL-2.0-only",
        name: "GNU GPL v2 (only)",
        filename: "GPL-2.0-only.txt",
        aliases: &["gpl-2.0-only", "gpl2-only"],
        fields: GPL_FIELDS,
        replacements: GPL2_REPLACEMENTS,
        preamble: None,
        post_process: Some(PostProcess::ProgramNoticeLine),
    },
    LicenseSpec {
        key: "GPL-3.0-only",
        name: "GNU GPL v3 (only)",
        filename: "GPL-3.0-only.txt",
        aliases: &["gpl-3.0-only", "gpl3-only"],
        fields: GPL_FIELDS,
        replacements: GPL3_REPLACEMENTS,
        preamble: None,
        post_process: None,
    },
    LicenseSpec {
        key: "CC0-1.0",
        name: "Creative Commons CC0 1.0 Universal",
        filename: "CC0-1.0.txt",
        aliases: &["cc0", "cc0-1.0", "creative-commons-zero"],
        fields: &[PROJECT_NAME, YEAR, AUTHOR_OR_HOLDER],
        replacements: &[],
        preamble: Some(PROJECT_PREAMBLE),
        post_process: None,
    },
    LicenseSpec {
        key: "BSL-1.0",
        name: "Boost Software License 1.0",
        filename: "BSL-1.0.txt",
        aliases: &["bsl", "boost", "boost-1.0"],
        fields: &[YEAR, COPYRIGHT_HOLDER],
        replacements: &[],
        preamble: Some(COPYRIGHT_PREAMBLE),
        post_process: None,
    },
    LicenseSpec {
        key: "ISC",
        name: "ISC License",
        filename: "ISC.txt",
        aliases: &["isc"],
        fields: &[YEAR, COPYRIGHT_HOLDER],
        replacements: &[],
        preamble: Some(COPYRIGHT_PREAMBLE),
        post_process: None,
    },
    LicenseSpec {
        key: "Apache-2.0",
        name: "Apache License 2.0",
        filename: "Apache-2.0.txt",
        aliases: &["apache", "apache2", "apache-2", "apache20"],
        fields: &[YEAR, COPYRIGHT_HOLDER, EMAIL],
        replacements: &[
            Replacement {
                tokens: &["[yyyy]"],
                value: ReplacementValue::Key("year"),
            },
            Replacement {
                tokens: &["[name of copyright owner]"],
                value: ReplacementValue::HolderWithEmail {
                    holder_key: "copyright_holder",
                },
            },
        ],
        preamble: None,
        post_process: None,
    },
    LicenseSpec {
        key: "BSD-3-Clause",
        name: "BSD 3-Clause License",
        filename: "BSD-3-Clause.txt",
        aliases: &["bsd3", "bsd-3", "bsd-3-clause"],
        fields: &[YEAR, OWNER],
        replacements: BSD_REPLACEMENTS,
        preamble: None,
        post_process: None,
    },
    LicenseSpec {
        key: "BSD-2-Clause",
        name: "BSD 2-Clause License",
        filename: "BSD-2-Clause.txt",
        aliases: &["bsd2", "bsd-2", "simplifiedbsd"],
        fields: &[YEAR, OWNER],
        replacements: BSD_REPLACEMENTS,
        preamble: None,
        post_process: None,
    },
    LicenseSpec {
        key: "GPL-3.0-or-later",
        name: "GNU GPL v3 (or later)",
        filename: "GPL-3.0-or-later.txt",
        aliases: &["gpl3", "gpl-3", "gplv3", "gpl-3.0"],
        fields: GPL_FIELDS,
        replacements: GPL3_REPLACEMENTS,
        preamble: None,
        post_process: None,
    },
    LicenseSpec {
        key: "GPL-2.0-or-later",
        name: "GNU GPL v2 (or later)",
        filename: "GPL-2.0-or-later.txt",
        aliases: &["gpl2", "gpl-2", "gplv2", "gpl-2.0"],
        fields: GPL_FIELDS,
        replacements: GPL2_REPLACEMENTS,
        preamble: None,
        post_process: Some(PostProcess::ProgramNoticeLine),
    },
    LicenseSpec {
        key: "LGPL-3.0-or-later",
        name: "GNU LGPL v3 (or later)",
        filename: "LGPL-3.0-or-later.txt",
        aliases: &["lgpl3", "lgpl-3", "lgplv3"],
        fields: LGPL3_FIELDS,
        // The shipped text is the bare LGPLv3 supplement, which carries no
        // appendix tokens; these rules simply find nothing to replace.
        replacements: GPL3_REPLACEMENTS,
        preamble: None,
        post_process: None,
    },
    LicenseSpec {
        key: "AGPL-3.0-or-later",
        name: "GNU AGPL v3 (or later)",
        filename: "AGPL-3.0-or-later.txt",
        aliases: &["agpl3", "agpl-3", "agplv3"],
        fields: GPL_FIELDS,
        replacements: AGPL3_REPLACEMENTS,
        preamble: None,
        post_process: None,
    },
    LicenseSpec {
        key: "MPL-2.0",
        name: "Mozilla Public License 2.0",
        filename: "MPL-2.0.txt",
        aliases: &["mpl", "mpl2"],
        fields: &[PROJECT_NAME, YEAR, COPYRIGHT_HOLDER],
        replacements: &[],
        preamble: Some(PROJECT_PREAMBLE),
        post_process: None,
    },
    LicenseSpec {
        key: "EPL-2.0",
        name: "Eclipse Public License 2.0",
        filename: "EPL-2.0.txt",
        aliases: &["epl", "epl2"],
        fields: &[PROJECT_NAME, YEAR, COPYRIGHT_HOLDER],
        replacements: &[],
        preamble: Some(PROJECT_PREAMBLE),
        post_process: None,
    },
    LicenseSpec {
        key: "Unlicense",
        name: "The Unlicense",
        filename: "Unlicense.txt",
        aliases: &["unlicense", "public-domain"],
        fields: &[PROJECT_NAME, YEAR, AUTHOR_OR_HOLDER],
        replacements: &[],
        preamble: Some(PROJECT_PREAMBLE),
        post_process: None,
    },
    LicenseSpec {
        key: "WTFPL",
        name: "Do What The F*ck You Want To Public License",
        filename: "WTFPL.txt",
        aliases: &["wtfpl"],
        fields: &[PROJECT_NAME, YEAR, AUTHOR],
        replacements: &[],
        preamble: Some(PROJECT_PREAMBLE),
        post_process: None,
    },
];
