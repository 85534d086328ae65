//! Fixed depth palette.
//!
//! A 256-entry cyan-to-magenta ramp. Components are in [0, 1]; they are
//! scaled to 8-bit at the point of use. The table is static data and is
//! never constructed or mutated at runtime.
//!
//! Indexing requires `0 <= index <= 255`. Callers clamp the normalized
//! depth before computing an index; an out-of-range index is a bug in the
//! caller, not a runtime condition.

pub const NCOLORS: usize = 256;

#[rustfmt::skip]
pub static DEPTH_CMAP: [[f32; 3]; NCOLORS] = [
    [0.000000, 1.000000, 1.000000],
    [0.003922, 0.996078, 1.000000],
    [0.007843, 0.992157, 1.000000],
    [0.011765, 0.988235, 1.000000],
    [0.015686, 0.984314, 1.000000],
    [0.019608, 0.980392, 1.000000],
    [0.023529, 0.976471, 1.000000],
    [0.027451, 0.972549, 1.000000],
    [0.031373, 0.968627, 1.000000],
    [0.035294, 0.964706, 1.000000],
    [0.039216, 0.960784, 1.000000],
    [0.043137, 0.956863, 1.000000],
    [0.047059, 0.952941, 1.000000],
    [0.050980, 0.949020, 1.000000],
    [0.054902, 0.945098, 1.000000],
    [0.058824, 0.941176, 1.000000],
    [0.062745, 0.937255, 1.000000],
    [0.066667, 0.933333, 1.000000],
    [0.070588, 0.929412, 1.000000],
    [0.074510, 0.925490, 1.000000],
    [0.078431, 0.921569, 1.000000],
    [0.082353, 0.917647, 1.000000],
    [0.086275, 0.913725, 1.000000],
    [0.090196, 0.909804, 1.000000],
    [0.094118, 0.905882, 1.000000],
    [0.098039, 0.901961, 1.000000],
    [0.101961, 0.898039, 1.000000],
    [0.105882, 0.894118, 1.000000],
    [0.109804, 0.890196, 1.000000],
    [0.113725, 0.886275, 1.000000],
    [0.117647, 0.882353, 1.000000],
    [0.121569, 0.878431, 1.000000],
    [0.125490, 0.874510, 1.000000],
    [0.129412, 0.870588, 1.000000],
    [0.133333, 0.866667, 1.000000],
    [0.137255, 0.862745, 1.000000],
    [0.141176, 0.858824, 1.000000],
    [0.145098, 0.854902, 1.000000],
    [0.149020, 0.850980, 1.000000],
    [0.152941, 0.847059, 1.000000],
    [0.156863, 0.843137, 1.000000],
    [0.160784, 0.839216, 1.000000],
    [0.164706, 0.835294, 1.000000],
    [0.168627, 0.831373, 1.000000],
    [0.172549, 0.827451, 1.000000],
    [0.176471, 0.823529, 1.000000],
    [0.180392, 0.819608, 1.000000],
    [0.184314, 0.815686, 1.000000],
    [0.188235, 0.811765, 1.000000],
    [0.192157, 0.807843, 1.000000],
    [0.196078, 0.803922, 1.000000],
    [0.200000, 0.800000, 1.000000],
    [0.203922, 0.796078, 1.000000],
    [0.207843, 0.792157, 1.000000],
    [0.211765, 0.788235, 1.000000],
    [0.215686, 0.784314, 1.000000],
    [0.219608, 0.780392, 1.000000],
    [0.223529, 0.776471, 1.000000],
    [0.227451, 0.772549, 1.000000],
    [0.231373, 0.768627, 1.000000],
    [0.235294, 0.764706, 1.000000],
    [0.239216, 0.760784, 1.000000],
    [0.243137, 0.756863, 1.000000],
    [0.247059, 0.752941, 1.000000],
    [0.250980, 0.749020, 1.000000],
    [0.254902, 0.745098, 1.000000],
    [0.258824, 0.741176, 1.000000],
    [0.262745, 0.737255, 1.000000],
    [0.266667, 0.733333, 1.000000],
    [0.270588, 0.729412, 1.000000],
    [0.274510, 0.725490, 1.000000],
    [0.278431, 0.721569, 1.000000],
    [0.282353, 0.717647, 1.000000],
    [0.286275, 0.713725, 1.000000],
    [0.290196, 0.709804, 1.000000],
    [0.294118, 0.705882, 1.000000],
    [0.298039, 0.701961, 1.000000],
    [0.301961, 0.698039, 1.000000],
    [0.305882, 0.694118, 1.000000],
    [0.309804, 0.690196, 1.000000],
    [0.313725, 0.686275, 1.000000],
    [0.317647, 0.682353, 1.000000],
    [0.321569, 0.678431, 1.000000],
    [0.325490, 0.674510, 1.000000],
    [0.329412, 0.670588, 1.000000],
    [0.333333, 0.666667, 1.000000],
    [0.337255, 0.662745, 1.000000],
    [0.341176, 0.658824, 1.000000],
    [0.345098, 0.654902, 1.000000],
    [0.349020, 0.650980, 1.000000],
    [0.352941, 0.647059, 1.000000],
    [0.356863, 0.643137, 1.000000],
    [0.360784, 0.639216, 1.000000],
    [0.364706, 0.635294, 1.000000],
    [0.368627, 0.631373, 1.000000],
    [0.372549, 0.627451, 1.000000],
    [0.376471, 0.623529, 1.000000],
    [0.380392, 0.619608, 1.000000],
    [0.384314, 0.615686, 1.000000],
    [0.388235, 0.611765, 1.000000],
    [0.392157, 0.607843, 1.000000],
    [0.396078, 0.603922, 1.000000],
    [0.400000, 0.600000, 1.000000],
    [0.403922, 0.596078, 1.000000],
    [0.407843, 0.592157, 1.000000],
    [0.411765, 0.588235, 1.000000],
    [0.415686, 0.584314, 1.000000],
    [0.419608, 0.580392, 1.000000],
    [0.423529, 0.576471, 1.000000],
    [0.427451, 0.572549, 1.000000],
    [0.431373, 0.568627, 1.000000],
    [0.435294, 0.564706, 1.000000],
    [0.439216, 0.560784, 1.000000],
    [0.443137, 0.556863, 1.000000],
    [0.447059, 0.552941, 1.000000],
    [0.450980, 0.549020, 1.000000],
    [0.454902, 0.545098, 1.000000],
    [0.458824, 0.541176, 1.000000],
    [0.462745, 0.537255, 1.000000],
    [0.466667, 0.533333, 1.000000],
    [0.470588, 0.529412, 1.000000],
    [0.474510, 0.525490, 1.000000],
    [0.478431, 0.521569, 1.000000],
    [0.482353, 0.517647, 1.000000],
    [0.486275, 0.513725, 1.000000],
    [0.490196, 0.509804, 1.000000],
    [0.494118, 0.505882, 1.000000],
    [0.498039, 0.501961, 1.000000],
    [0.501961, 0.498039, 1.000000],
    [0.505882, 0.494118, 1.000000],
    [0.509804, 0.490196, 1.000000],
    [0.513725, 0.486275, 1.000000],
    [0.517647, 0.482353, 1.000000],
    [0.521569, 0.478431, 1.000000],
    [0.525490, 0.474510, 1.000000],
    [0.529412, 0.470588, 1.000000],
    [0.533333, 0.466667, 1.000000],
    [0.537255, 0.462745, 1.000000],
    [0.541176, 0.458824, 1.000000],
    [0.545098, 0.454902, 1.000000],
    [0.549020, 0.450980, 1.000000],
    [0.552941, 0.447059, 1.000000],
    [0.556863, 0.443137, 1.000000],
    [0.560784, 0.439216, 1.000000],
    [0.564706, 0.435294, 1.000000],
    [0.568627, 0.431373, 1.000000],
    [0.572549, 0.427451, 1.000000],
    [0.576471, 0.423529, 1.000000],
    [0.580392, 0.419608, 1.000000],
    [0.584314, 0.415686, 1.000000],
    [0.588235, 0.411765, 1.000000],
    [0.592157, 0.407843, 1.000000],
    [0.596078, 0.403922, 1.000000],
    [0.600000, 0.400000, 1.000000],
    [0.603922, 0.396078, 1.000000],
    [0.607843, 0.392157, 1.000000],
    [0.611765, 0.388235, 1.000000],
    [0.615686, 0.384314, 1.000000],
    [0.619608, 0.380392, 1.000000],
    [0.623529, 0.376471, 1.000000],
    [0.627451, 0.372549, 1.000000],
    [0.631373, 0.368627, 1.000000],
    [0.635294, 0.364706, 1.000000],
    [0.639216, 0.360784, 1.000000],
    [0.643137, 0.356863, 1.000000],
    [0.647059, 0.352941, 1.000000],
    [0.650980, 0.349020, 1.000000],
    [0.654902, 0.345098, 1.000000],
    [0.658824, 0.341176, 1.000000],
    [0.662745, 0.337255, 1.000000],
    [0.666667, 0.333333, 1.000000],
    [0.670588, 0.329412, 1.000000],
    [0.674510, 0.325490, 1.000000],
    [0.678431, 0.321569, 1.000000],
    [0.682353, 0.317647, 1.000000],
    [0.686275, 0.313725, 1.000000],
    [0.690196, 0.309804, 1.000000],
    [0.694118, 0.305882, 1.000000],
    [0.698039, 0.301961, 1.000000],
    [0.701961, 0.298039, 1.000000],
    [0.705882, 0.294118, 1.000000],
    [0.709804, 0.290196, 1.000000],
    [0.713725, 0.286275, 1.000000],
    [0.717647, 0.282353, 1.000000],
    [0.721569, 0.278431, 1.000000],
    [0.725490, 0.274510, 1.000000],
    [0.729412, 0.270588, 1.000000],
    [0.733333, 0.266667, 1.000000],
    [0.737255, 0.262745, 1.000000],
    [0.741176, 0.258824, 1.000000],
    [0.745098, 0.254902, 1.000000],
    [0.749020, 0.250980, 1.000000],
    [0.752941, 0.247059, 1.000000],
    [0.756863, 0.243137, 1.000000],
    [0.760784, 0.239216, 1.000000],
    [0.764706, 0.235294, 1.000000],
    [0.768627, 0.231373, 1.000000],
    [0.772549, 0.227451, 1.000000],
    [0.776471, 0.223529, 1.000000],
    [0.780392, 0.219608, 1.000000],
    [0.784314, 0.215686, 1.000000],
    [0.788235, 0.211765, 1.000000],
    [0.792157, 0.207843, 1.000000],
    [0.796078, 0.203922, 1.000000],
    [0.800000, 0.200000, 1.000000],
    [0.803922, 0.196078, 1.000000],
    [0.807843, 0.192157, 1.000000],
    [0.811765, 0.188235, 1.000000],
    [0.815686, 0.184314, 1.000000],
    [0.819608, 0.180392, 1.000000],
    [0.823529, 0.176471, 1.000000],
    [0.827451, 0.172549, 1.000000],
    [0.831373, 0.168627, 1.000000],
    [0.835294, 0.164706, 1.000000],
    [0.839216, 0.160784, 1.000000],
    [0.843137, 0.156863, 1.000000],
    [0.847059, 0.152941, 1.000000],
    [0.850980, 0.149020, 1.000000],
    [0.854902, 0.145098, 1.000000],
    [0.858824, 0.141176, 1.000000],
    [0.862745, 0.137255, 1.000000],
    [0.866667, 0.133333, 1.000000],
    [0.870588, 0.129412, 1.000000],
    [0.874510, 0.125490, 1.000000],
    [0.878431, 0.121569, 1.000000],
    [0.882353, 0.117647, 1.000000],
    [0.886275, 0.113725, 1.000000],
    [0.890196, 0.109804, 1.000000],
    [0.894118, 0.105882, 1.000000],
    [0.898039, 0.101961, 1.000000],
    [0.901961, 0.098039, 1.000000],
    [0.905882, 0.094118, 1.000000],
    [0.909804, 0.090196, 1.000000],
    [0.913725, 0.086275, 1.000000],
    [0.917647, 0.082353, 1.000000],
    [0.921569, 0.078431, 1.000000],
    [0.925490, 0.074510, 1.000000],
    [0.929412, 0.070588, 1.000000],
    [0.933333, 0.066667, 1.000000],
    [0.937255, 0.062745, 1.000000],
    [0.941176, 0.058824, 1.000000],
    [0.945098, 0.054902, 1.000000],
    [0.949020, 0.050980, 1.000000],
    [0.952941, 0.047059, 1.000000],
    [0.956863, 0.043137, 1.000000],
    [0.960784, 0.039216, 1.000000],
    [0.964706, 0.035294, 1.000000],
    [0.968627, 0.031373, 1.000000],
    [0.972549, 0.027451, 1.000000],
    [0.976471, 0.023529, 1.000000],
    [0.980392, 0.019608, 1.000000],
    [0.984314, 0.015686, 1.000000],
    [0.988235, 0.011765, 1.000000],
    [0.992157, 0.007843, 1.000000],
    [0.996078, 0.003922, 1.000000],
    [1.000000, 0.000000, 1.000000],
];
