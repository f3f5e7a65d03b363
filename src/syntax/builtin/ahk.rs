//! AutoHotkey v1 word lists

use crate::syntax::keywords::KeywordLists;
use crate::syntax::tokens::KeywordClass;

const KEYWORDS: &str = "\
break continue else exit exitapp gosub goto if ifequal ifexist ifgreater \
ifgreaterorequal ifinstring ifless iflessorequal ifmsgbox ifnotequal ifnotexist \
ifnotinstring ifwinactive ifwinexist ifwinnotactive ifwinnotexist loop return \
settimer sleep suspend static global local byref while until for in try catch \
finally throw class extends new and or not";

const FUNCTIONS: &str = "\
abs acos asc asin atan ceil chr cos dllcall exp fileexist floor func getkeystate \
il_add il_create il_destroy instr isfunc islabel isobject ln log lv_add lv_delete \
lv_deletecol lv_getcount lv_getnext lv_gettext lv_insert lv_insertcol lv_modify \
lv_modifycol lv_setimagelist mod numget numput onmessage regexmatch regexreplace \
registercallback round sin sqrt strlen strput strget subst substr tan tv_add \
tv_delete tv_getchild tv_getcount tv_getnext tv_get tv_getparent tv_getprev \
tv_getselection tv_gettext tv_modify varsetcapacity winactive winexist trim ltrim \
rtrim fileopen strsplit comobjcreate comobjget comobjactive comobjerror format \
msgbox inputbox tooltip traytip run runwait send sendinput sendraw sendplay \
click mousemove mouseclick mousegetpos winactivate winclose winwait winwaitactive \
winget wingettitle winmove winset controlclick controlsend controlgettext \
controlsettext fileappend fileread filedelete filecopy filemove fileselectfile \
iniread iniwrite regread regwrite stringreplace stringsplit stringlower \
stringupper stringleft stringright stringlen stringtrimleft stringtrimright \
gui guicontrol guicontrolget hotkey menu process setworkingdir settitlematchmode \
setbatchlines setkeydelay setmousedelay setwindelay sendmode coordmode envget \
envset envadd envsub sort splitpath";

const MACROS: &str = "\
a_ahkpath a_ahkversion a_appdata a_appdatacommon a_batchlines a_caretx a_carety \
a_computername a_controldelay a_cursor a_dd a_ddd a_dddd a_defaultmousespeed \
a_desktop a_desktopcommon a_detecthiddentext a_detecthiddenwindows a_endchar \
a_eventinfo a_exitreason a_formatfloat a_formatinteger a_gui a_guicontrol \
a_guicontrolevent a_guievent a_guiheight a_guiwidth a_guix a_guiy a_hour \
a_iconfile a_iconhidden a_iconnumber a_icontip a_index a_ipaddress1 a_ipaddress2 \
a_ipaddress3 a_ipaddress4 a_isadmin a_iscompiled a_issuspended a_keydelay \
a_language a_lasterror a_linefile a_linenumber a_loopfield a_loopfileattrib \
a_loopfiledir a_loopfileext a_loopfilefullpath a_loopfilelongpath a_loopfilename \
a_loopfileshortname a_loopfileshortpath a_loopfilesize a_loopfilesizekb \
a_loopfilesizemb a_loopfiletimeaccessed a_loopfiletimecreated \
a_loopfiletimemodified a_loopreadline a_loopregkey a_loopregname \
a_loopregsubkey a_loopregtimemodified a_loopregtype a_mday a_min a_mm a_mmm \
a_mmmm a_mon a_mousedelay a_msec a_mydocuments a_now a_nowutc a_numbatchlines \
a_ostype a_osversion a_priorhotkey a_programfiles a_programs a_programscommon \
a_screenheight a_screenwidth a_scriptdir a_scriptfullpath a_scriptname a_sec \
a_space a_startmenu a_startmenucommon a_startup a_startupcommon a_stringcasesense \
a_tab a_temp a_thishotkey a_thismenu a_thismenuitem a_thismenuitempos a_tickcount \
a_timeidle a_timeidlephysical a_timesincepriorhotkey a_timesincethishotkey \
a_titlematchmode a_titlematchmodespeed a_username a_wday a_windelay a_windir \
a_workingdir a_yday a_year a_yweek a_yyyy clipboard clipboardall comspec \
errorlevel programfiles true false";

const SEND_KEYS: &str = "\
{alt} {altdown} {altup} {appskey} {backspace} {blind} {browser_back} \
{browser_favorites} {browser_forward} {browser_home} {browser_refresh} \
{browser_search} {browser_stop} {bs} {capslock} {click} {control} {ctrl} \
{ctrlbreak} {ctrldown} {ctrlup} {del} {delete} {down} {end} {enter} {esc} \
{escape} {f1} {f2} {f3} {f4} {f5} {f6} {f7} {f8} {f9} {f10} {f11} {f12} {f13} \
{f14} {f15} {f16} {f17} {f18} {f19} {f20} {f21} {f22} {f23} {f24} {home} {ins} \
{insert} {joy1} {joy2} {joy3} {joy4} {joy5} {joy6} {joy7} {joy8} {launch_app1} \
{launch_app2} {launch_mail} {launch_media} {lbutton} {lcontrol} {lctrl} {left} \
{lshift} {lwin} {lwindown} {lwinup} {mbutton} {media_next} {media_play_pause} \
{media_prev} {media_stop} {numlock} {numpad0} {numpad1} {numpad2} {numpad3} \
{numpad4} {numpad5} {numpad6} {numpad7} {numpad8} {numpad9} {numpadadd} \
{numpadclear} {numpaddel} {numpaddiv} {numpaddot} {numpaddown} {numpadend} \
{numpadenter} {numpadhome} {numpadins} {numpadleft} {numpadmult} {numpadpgdn} \
{numpadpgup} {numpadright} {numpadsub} {numpadup} {pause} {pgdn} {pgup} \
{printscreen} {ralt} {raw} {rbutton} {rcontrol} {rctrl} {right} {rshift} {rwin} \
{rwindown} {rwinup} {scrolllock} {shift} {shiftdown} {shiftup} {space} {tab} {up} \
{volume_down} {volume_mute} {volume_up} {wheeldown} {wheelup} {xbutton1} \
{xbutton2}";

const PREPROCESSOR: &str = "\
#allowsamelinecomments #clipboardtimeout #commentflag #comments-end \
#comments-start #errorstdout #escapechar #hotkeyinterval #hotkeymodifiertimeout \
#hotstring #if #ifwinactive #ifwinexist #ifwinnotactive #ifwinnotexist #include \
#includeagain #installkeybdhook #installmousehook #keyhistory #ltrim \
#maxhotkeysperinterval #maxmem #maxthreads #maxthreadsbuffer #maxthreadsperhotkey \
#menumaskkey #noenv #notrayicon #persistent #singleinstance #usehook #warn \
#winactivateforce";

const SPECIAL: &str = "#region #endregion";

/// Built-in lists for every class except the user-defined ones
pub fn ahk_keywords() -> KeywordLists {
    KeywordLists::new()
        .with(KeywordClass::Keywords, KEYWORDS)
        .with(KeywordClass::Functions, FUNCTIONS)
        .with(KeywordClass::Macros, MACROS)
        .with(KeywordClass::SendKeys, SEND_KEYS)
        .with(KeywordClass::Preprocessor, PREPROCESSOR)
        .with(KeywordClass::Special, SPECIAL)
}
